//! Meal Discord commands - `log`, `meals`, and `addfood`.
//!
//! This module contains commands that interact with the database through our
//! core modules to handle meal logging and catalog management.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{catalog, meals, progress},
        errors::{Error, Result},
    };
    use chrono::Utc;

    /// Logs a meal from the food catalog.
    ///
    /// The food's per-serving nutrition is scaled to the consumed quantity
    /// and frozen into the entry; the day's totals update immediately.
    #[poise::command(slash_command, prefix_command)]
    pub async fn log(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the food to log"]
        #[autocomplete = "autocomplete::autocomplete_food_name"]
        food_name: String,
        #[description = "Quantity in grams"] quantity_grams: f64,
        #[description = "Meal type (breakfast, lunch, dinner, snack)"]
        #[autocomplete = "autocomplete::autocomplete_meal_type"]
        meal_type: Option<String>,
        #[description = "Optional notes"] notes: Option<String>,
    ) -> Result<()> {
        // Validate quantity parameter
        if !quantity_grams.is_finite() || quantity_grams <= 0.0 {
            ctx.say("❌ Invalid quantity: must be a positive number of grams")
                .await?;
            return Ok(());
        }

        let meal_type = match meal_type.as_deref() {
            None => meals::MealType::Snack,
            Some(raw) => match meals::MealType::parse(raw) {
                Some(mt) => mt,
                None => {
                    ctx.say("❌ Meal type must be breakfast, lunch, dinner, or snack")
                        .await?;
                    return Ok(());
                }
            },
        };

        let db = &ctx.data().database;

        // Resolve against the catalog, first match wins
        let matches = catalog::search_foods(db, &food_name).await?;
        let Some(food) = matches.first() else {
            ctx.say(&format!(
                "❌ Food '{food_name}' not found. Use `/addfood` to add a custom food.",
            ))
            .await?;
            return Ok(());
        };

        let entry =
            meals::log_meal(db, food, quantity_grams, meal_type, Utc::now(), notes).await?;

        progress::update_streaks(db, Utc::now(), &ctx.data().goals).await?;
        let unlocked = progress::check_achievements(db).await?;

        let mut reply = format!(
            "✅ Logged {:.0}g of {} ({:.0} kcal) as {}",
            quantity_grams, food.name, entry.calories, meal_type
        );
        for achievement in unlocked {
            reply.push_str(&format!("\n🏆 Achievement unlocked: **{}**", achievement.title));
        }
        ctx.say(reply).await?;

        Ok(())
    }

    /// Shows today's meals and nutrition totals.
    #[poise::command(slash_command, prefix_command)]
    pub async fn meals(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;
        let today = meals::day_bucket(Utc::now());

        let entries = meals::get_meals_for_date(db, today).await?;
        if entries.is_empty() {
            ctx.say("No meals logged today.").await?;
            return Ok(());
        }

        let totals = meals::get_daily_nutrition(db, today).await?;

        let mut reply = format!("**Meals for {today}**\n");
        for entry in &entries {
            reply.push_str(&format!(
                "• [{}] {} - {:.0}g, {:.0} kcal (id {})\n",
                entry.meal_type, entry.food_name, entry.quantity_grams, entry.calories, entry.id
            ));
        }
        reply.push_str(&format!(
            "\n**Totals**: {:.0} kcal | {:.1}g protein | {:.1}g carbs | {:.1}g fat | {:.1}g fiber",
            totals.calories, totals.protein_g, totals.carbs_g, totals.fat_g, totals.fiber_g
        ));

        ctx.say(reply).await?;
        Ok(())
    }

    /// Edits a logged meal entry's quantity, slot, or notes.
    #[poise::command(slash_command, prefix_command)]
    pub async fn editmeal(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Meal entry id (see /meals)"] id: i64,
        #[description = "New quantity in grams"] quantity_grams: Option<f64>,
        #[description = "New meal type (breakfast, lunch, dinner, snack)"]
        #[autocomplete = "autocomplete::autocomplete_meal_type"]
        meal_type: Option<String>,
        #[description = "New notes"] notes: Option<String>,
    ) -> Result<()> {
        let meal_type = match meal_type.as_deref() {
            None => None,
            Some(raw) => match meals::MealType::parse(raw) {
                Some(mt) => Some(mt),
                None => {
                    ctx.say("❌ Meal type must be breakfast, lunch, dinner, or snack")
                        .await?;
                    return Ok(());
                }
            },
        };

        if quantity_grams.is_none() && meal_type.is_none() && notes.is_none() {
            ctx.say("❌ Nothing to change: give a quantity, meal type, or notes")
                .await?;
            return Ok(());
        }

        let db = &ctx.data().database;
        let update = meals::MealEntryUpdate {
            quantity_grams,
            meal_type,
            notes,
            ..Default::default()
        };

        match meals::update_meal_entry(db, id, update).await {
            Ok(updated) => {
                ctx.say(format!(
                    "✅ Updated entry #{}: {:.0}g of {} as {}",
                    updated.id, updated.quantity_grams, updated.food_name, updated.meal_type
                ))
                .await?;
            }
            Err(Error::MealEntryNotFound { id }) => {
                ctx.say(format!(
                    "❌ No meal entry #{id}. Use `/meals` to see today's entries."
                ))
                .await?;
            }
            Err(Error::InvalidQuantity { quantity }) => {
                ctx.say(format!("❌ Invalid quantity: {quantity}")).await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Deletes a logged meal entry and updates the day's totals.
    #[poise::command(slash_command, prefix_command)]
    pub async fn deletemeal(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Meal entry id (see /meals)"] id: i64,
    ) -> Result<()> {
        let db = &ctx.data().database;

        match meals::delete_meal_entry(db, id).await {
            Ok(()) => {
                ctx.say(format!("✅ Deleted meal entry #{id}; totals recomputed."))
                    .await?;
            }
            Err(Error::MealEntryNotFound { id }) => {
                ctx.say(format!(
                    "❌ No meal entry #{id}. Use `/meals` to see today's entries."
                ))
                .await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Adds a custom food to the catalog.
    #[poise::command(slash_command, prefix_command)]
    #[allow(clippy::too_many_arguments)]
    pub async fn addfood(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Food name"] name: String,
        #[description = "Calories per serving"] calories: f64,
        #[description = "Serving size in grams"] serving_size_grams: f64,
        #[description = "Serving label (e.g. '1 cup')"] serving_size: Option<String>,
        #[description = "Protein per serving in grams"] protein_g: Option<f64>,
        #[description = "Carbs per serving in grams"] carbs_g: Option<f64>,
        #[description = "Fat per serving in grams"] fat_g: Option<f64>,
        #[description = "Fiber per serving in grams"] fiber_g: Option<f64>,
        #[description = "Category (e.g. 'Fruits')"] category: Option<String>,
        #[description = "Brand name"] brand: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let serving_label = serving_size.unwrap_or_else(|| format!("{serving_size_grams}g"));

        let food = match catalog::create_food(
            db,
            catalog::NewFood {
                name,
                brand,
                category: category.unwrap_or_else(|| "Other".to_string()),
                calories,
                protein_g: protein_g.unwrap_or(0.0),
                carbs_g: carbs_g.unwrap_or(0.0),
                fat_g: fat_g.unwrap_or(0.0),
                fiber_g: fiber_g.unwrap_or(0.0),
                serving_size: serving_label,
                serving_size_grams,
                ..Default::default()
            },
        )
        .await
        {
            Ok(food) => food,
            Err(Error::Config { message }) => {
                ctx.say(format!("❌ {message}")).await?;
                return Ok(());
            }
            Err(Error::InvalidQuantity { quantity }) => {
                ctx.say(format!("❌ Invalid serving size: {quantity}"))
                    .await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        ctx.say(format!(
            "✅ Added '{}' to the catalog ({:.0} kcal per {})",
            food.name, food.calories, food.serving_size
        ))
        .await?;

        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
