//! Data Discord commands - `export` and `import`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::exchange,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    /// Exports all ledgers as a JSON attachment.
    #[poise::command(slash_command, prefix_command)]
    pub async fn export(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;

        let json = exchange::export_data(db).await?;
        let attachment =
            serenity::CreateAttachment::bytes(json.into_bytes(), "nutribuddy-export.json");

        ctx.send(
            poise::CreateReply::default()
                .content("✅ Here is your data. Re-import it anytime with `/import`.")
                .attachment(attachment),
        )
        .await?;
        Ok(())
    }

    /// Imports a previously exported JSON payload, merging into current data.
    #[poise::command(slash_command, prefix_command)]
    pub async fn import(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "JSON payload from a previous /export"] json: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        match exchange::import_data(db, &json).await {
            Ok(summary) => {
                ctx.say(format!(
                    "✅ Imported {} day(s) with {} meal(s), {} weight, {} water, {} exercise entries, {} custom food(s).",
                    summary.logs,
                    summary.meals,
                    summary.weight_entries,
                    summary.water_entries,
                    summary.exercise_entries,
                    summary.custom_foods,
                ))
                .await?;
            }
            Err(Error::Json(e)) => {
                // Malformed payloads abort before touching state
                ctx.say(format!("❌ That isn't a valid export payload: {e}"))
                    .await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
