//! AI Discord commands - `ai` and `recipes`.
//!
//! Natural-language entry degrades to the deterministic fallback parser when
//! Gemini is unavailable, so `/ai` always does something useful. Recipe
//! generation has no fallback and reports service failures to the user.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        ai::{dispatch, types::DietProfile},
        bot::BotData,
        errors::{Error, Result},
    };
    use base64::Engine as _;
    use poise::serenity_prelude as serenity;

    /// Logs meals, water, weight, or feature requests from plain English.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ai(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "What did you eat or do? (e.g. 'I had an apple and 500ml of water')"]
        text: String,
    ) -> Result<()> {
        if text.trim().is_empty() {
            ctx.say("❌ Tell me what to log, e.g. `/ai I had an apple for breakfast`")
                .await?;
            return Ok(());
        }

        // Parsing may take a moment; defer so the interaction doesn't time out
        ctx.defer().await?;

        let data = ctx.data();
        let summary =
            dispatch::process_input(&data.database, &data.gemini, &text, &data.goals).await?;

        let mut lines = Vec::new();
        if summary.meals_logged > 0 {
            lines.push(format!("🍽️ Logged {} meal(s)", summary.meals_logged));
        }
        if summary.water_logged > 0 {
            lines.push("💧 Logged water intake".to_string());
        }
        if summary.weights_logged > 0 {
            lines.push("⚖️ Logged weight".to_string());
        }
        if summary.features_requested > 0 {
            lines.push("💡 Filed a feature request".to_string());
        }
        if !summary.unmatched_foods.is_empty() {
            lines.push(format!(
                "❓ No catalog match for: {} (use `/addfood` to add them)",
                summary.unmatched_foods.join(", ")
            ));
        }
        if lines.is_empty() {
            lines.push(
                "I couldn't find anything to log in that. Try `/help` for examples.".to_string(),
            );
        }

        ctx.say(lines.join("\n")).await?;
        Ok(())
    }

    /// Suggests recipes for a comma-separated list of ingredients.
    #[poise::command(slash_command, prefix_command)]
    pub async fn recipes(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Comma-separated ingredients (e.g. 'chicken, rice, broccoli')"]
        ingredients: String,
    ) -> Result<()> {
        let ingredients: Vec<String> = ingredients
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if ingredients.is_empty() {
            ctx.say("❌ Give me at least one ingredient").await?;
            return Ok(());
        }

        ctx.defer().await?;

        let suggestions = match ctx.data().gemini.generate_recipes(&ingredients).await {
            Ok(suggestions) => suggestions,
            Err(Error::AiService { message }) => {
                ctx.say(format!("❌ Recipe generation unavailable: {message}"))
                    .await?;
                return Ok(());
            }
            Err(Error::Http(e)) => {
                ctx.say(format!("❌ Recipe generation failed: {e}")).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if suggestions.is_empty() {
            ctx.say("No recipes found for those ingredients.").await?;
            return Ok(());
        }

        let mut reply = String::new();
        for recipe in suggestions.iter().take(3) {
            reply.push_str(&format!(
                "**{}** ({}, prep {}, cook {})\n{:.0} kcal/serving, serves {}: {} protein, {} carbs, {} fat\n",
                recipe.title,
                recipe.difficulty,
                recipe.prep_time,
                recipe.cook_time,
                recipe.calories,
                recipe.servings,
                recipe.nutrition_info.protein,
                recipe.nutrition_info.carbs,
                recipe.nutrition_info.fat,
            ));
        }

        ctx.say(reply).await?;
        Ok(())
    }

    /// Generates a personalized diet plan.
    #[poise::command(slash_command, prefix_command)]
    #[allow(clippy::too_many_arguments)]
    pub async fn dietplan(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Age in years"] age: u32,
        #[description = "Gender"] gender: String,
        #[description = "Height in centimeters"] height_cm: f64,
        #[description = "Weight in kilograms"] weight_kg: f64,
        #[description = "Activity level (sedentary, light, moderate, active)"]
        activity_level: String,
        #[description = "Comma-separated dietary restrictions"] restrictions: Option<String>,
        #[description = "Goal (e.g. 'lose weight', 'maintain')"] goal: Option<String>,
    ) -> Result<()> {
        if !height_cm.is_finite()
            || height_cm <= 0.0
            || !weight_kg.is_finite()
            || weight_kg <= 0.0
        {
            ctx.say("❌ Height and weight must be positive numbers")
                .await?;
            return Ok(());
        }

        ctx.defer().await?;

        let profile = DietProfile {
            age,
            gender,
            height_cm,
            weight_kg,
            activity_level,
            dietary_restrictions: restrictions
                .map(|r| {
                    r.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            goals: goal.unwrap_or_else(|| "maintain".to_string()),
        };

        let plan = match ctx.data().gemini.generate_diet_plan(&profile).await {
            Ok(plan) => plan,
            Err(Error::AiService { message }) => {
                ctx.say(format!("❌ Diet plan generation unavailable: {message}"))
                    .await?;
                return Ok(());
            }
            Err(Error::Http(e)) => {
                ctx.say(format!("❌ Diet plan generation failed: {e}"))
                    .await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let mut reply = format!(
            "**Diet Plan** ({:.0} kcal/day)\nMacros: {:.0}g protein / {:.0}g carbs / {:.0}g fat",
            plan.daily_calories,
            plan.macro_split.protein,
            plan.macro_split.carbs,
            plan.macro_split.fat
        );
        for rec in plan.recommendations.iter().take(5) {
            reply.push_str(&format!(
                "\n• {}: {} ({})",
                rec.category,
                rec.foods.join(", "),
                rec.reason
            ));
        }

        ctx.say(reply).await?;
        Ok(())
    }

    /// Extracts line items from a receipt photo.
    #[poise::command(slash_command)]
    pub async fn receipt(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Receipt photo (JPEG)"] image: serenity::Attachment,
    ) -> Result<()> {
        ctx.defer().await?;

        let bytes = image.download().await.map_err(Error::from)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);

        let items = match ctx.data().gemini.analyze_receipt(&encoded).await {
            Ok(items) => items,
            Err(Error::AiService { message }) => {
                ctx.say(format!("❌ Receipt analysis unavailable: {message}"))
                    .await?;
                return Ok(());
            }
            Err(Error::Http(e)) => {
                ctx.say(format!("❌ Receipt analysis failed: {e}")).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if items.is_empty() {
            ctx.say("No line items found on that receipt.").await?;
            return Ok(());
        }

        let mut reply = String::from("**Receipt items**\n");
        for item in &items {
            reply.push_str(&format!(
                "• {} x{:.0}, ${:.2}\n",
                item.name, item.quantity, item.price
            ));
        }

        ctx.say(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
