//! Feature board Discord commands - `request`, `features`, and `vote`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::features,
        errors::{Error, Result},
    };

    /// Files a new feature request.
    #[poise::command(slash_command, prefix_command)]
    pub async fn request(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "What should NutriBuddy do?"] description: String,
        #[description = "Category (tracking, analysis, planning, social, ui, integration)"]
        #[autocomplete = "autocomplete::autocomplete_feature_category"]
        category: Option<String>,
    ) -> Result<()> {
        if description.trim().is_empty() {
            ctx.say("❌ The request description cannot be empty").await?;
            return Ok(());
        }

        let db = &ctx.data().database;
        let category = category.unwrap_or_else(|| "tracking".to_string());

        let created = features::request_feature(db, description, &category).await?;

        ctx.say(format!(
            "✅ Filed feature request #{} in '{}'. Others can `/vote {}` for it.",
            created.id, created.category, created.id
        ))
        .await?;
        Ok(())
    }

    /// Lists feature requests, most-voted first.
    #[poise::command(slash_command, prefix_command)]
    pub async fn features(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;

        let requests = features::list_feature_requests(db).await?;
        if requests.is_empty() {
            ctx.say("No feature requests yet. File one with `/request`.")
                .await?;
            return Ok(());
        }

        let mut reply = String::from("**Feature Requests**\n");
        for request in requests.iter().take(10) {
            reply.push_str(&format!(
                "• #{} [{}] {}: {} vote(s), {}\n",
                request.id, request.category, request.description, request.votes, request.status
            ));
        }

        ctx.say(reply).await?;
        Ok(())
    }

    /// Votes for a feature request by id.
    #[poise::command(slash_command, prefix_command)]
    pub async fn vote(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Feature request id (see /features)"] id: i64,
    ) -> Result<()> {
        let db = &ctx.data().database;

        match features::vote_feature(db, id).await {
            Ok(updated) => {
                ctx.say(format!(
                    "✅ Voted! #{} now has {} vote(s).",
                    updated.id, updated.votes
                ))
                .await?;
            }
            Err(Error::FeatureRequestNotFound { id }) => {
                ctx.say(format!(
                    "❌ No feature request #{id}. Use `/features` to see the board."
                ))
                .await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
