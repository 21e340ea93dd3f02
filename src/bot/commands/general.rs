//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't require database operations
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    ///
    /// This is a simple health check command that doesn't require any database operations.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**NutriBuddy Help**\n\
        Here is a summary of all available commands for NutriBuddy.\n\n\
        **Logging Commands**\n\
        • `/log <food> <grams> [meal_type] [notes]` - Logs a meal from the food catalog.\n\
        • `/editmeal <id> [grams] [meal_type] [notes]` - Edits a logged meal entry.\n\
        • `/deletemeal <id>` - Deletes a logged meal entry.\n\
        • `/water <ml>` - Logs water intake.\n\
        • `/weight <kg> [notes]` - Logs a weight measurement.\n\
        • `/exercise <name> <minutes>` - Logs an exercise session.\n\
        • `/ai <text>` - Logs anything from plain English (\"I had an apple and 500ml of water\").\n\n\
        **Review Commands**\n\
        • `/meals` - Shows today's meals and nutrition totals.\n\
        • `/progress` - Shows calorie progress, water, recent weight, and streaks.\n\
        • `/recipes <ingredients>` - Suggests recipes for the ingredients you have.\n\
        • `/dietplan <age> <gender> <height> <weight> <activity>` - Generates a diet plan.\n\
        • `/receipt <image>` - Extracts line items from a receipt photo.\n\n\
        **Catalog & Board Commands**\n\
        • `/addfood <name> <calories> ...` - Adds a custom food to the catalog.\n\
        • `/request <description> [category]` - Files a feature request.\n\
        • `/features` - Lists feature requests by votes.\n\
        • `/vote <id>` - Votes for a feature request.\n\n\
        **Data Commands**\n\
        • `/export` - Exports all ledgers as JSON.\n\
        • `/import <json>` - Merges an exported JSON payload back in.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
