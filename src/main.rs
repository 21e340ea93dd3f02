//! NutriBuddy - a Discord nutrition and calorie tracking bot.

use dotenvy::dotenv;
use nutribuddy::{
    ai::GeminiClient,
    bot,
    config::{self, database, foods},
    errors::{Error, Result},
};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_default_config()
        .inspect_err(|e| error!("Failed to load config.toml: {e}"))?;
    info!("Successfully processed application configuration.");

    // 4. Initialize database
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connected successfully."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. Seed the food catalog (idempotent; existing foods are skipped)
    let seeded = foods::seed_food_catalog(&db, &app_config.foods)
        .await
        .inspect_err(|e| error!("Failed to seed food catalog: {e}"))?;
    info!("Seeded {seeded} catalog food(s).");

    // 6. Build the Gemini client; a missing key means fallback-only parsing
    let gemini = GeminiClient::from_env();

    // 7. Run the bot. DISCORD_BOT_TOKEN is loaded here, directly before use.
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {e}"))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, db, gemini, app_config.goals)
        .await
        .map_err(Error::from)?;

    Ok(())
}
