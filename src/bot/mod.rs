//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the `NutriBuddy` application,
//! including all slash commands, autocomplete handlers, and bot context management.

/// Discord command implementations (meal, tracking, ai, features, data, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{ai::GeminiClient, config::goals::GoalsConfig, errors::Error};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use tracing::info;

/// Shared data available to all bot commands.
/// This structure holds the database connection, the Gemini client, and the
/// configured daily goals that commands need to access.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Gemini client (possibly disabled) for natural-language commands
    pub gemini: GeminiClient,
    /// Daily calorie/water goals from config.toml
    pub goals: GoalsConfig,
}

impl BotData {
    /// Creates a new `BotData` instance. This is typically called during bot
    /// initialization to set up the shared context for all commands.
    #[must_use]
    pub const fn new(
        database: DatabaseConnection,
        gemini: GeminiClient,
        goals: GoalsConfig,
    ) -> Self {
        Self {
            database,
            gemini,
            goals,
        }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                tracing::error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {e}");
            }
        }
    }
}

/// Runs the Discord bot until the client stops.
pub async fn run_bot(
    token: String,
    database: DatabaseConnection,
    gemini: GeminiClient,
    goals: GoalsConfig,
) -> Result<(), serenity::Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::ping(),
                commands::help(),
                commands::log(),
                commands::meals(),
                commands::editmeal(),
                commands::deletemeal(),
                commands::addfood(),
                commands::weight(),
                commands::water(),
                commands::exercise(),
                commands::progress(),
                commands::ai(),
                commands::recipes(),
                commands::dietplan(),
                commands::receipt(),
                commands::request(),
                commands::features(),
                commands::vote(),
                commands::export(),
                commands::import(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData::new(database, gemini, goals))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await
}
