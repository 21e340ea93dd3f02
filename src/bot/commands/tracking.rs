//! Tracking Discord commands - `weight`, `water`, and `progress`.
//!
//! This module contains commands that interact with the database through our
//! core modules to handle weight/water logging and progress reporting.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{meals, progress, tracking},
        errors::{Error, Result},
    };
    use chrono::Utc;

    /// Logs a weight measurement.
    #[poise::command(slash_command, prefix_command)]
    pub async fn weight(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Weight in kilograms"] weight_kg: f64,
        #[description = "Optional notes"] notes: Option<String>,
        #[description = "Body fat percentage"] body_fat_percentage: Option<f64>,
        #[description = "Muscle mass in kilograms"] muscle_mass_kg: Option<f64>,
    ) -> Result<()> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            ctx.say("❌ Invalid weight: must be a positive number of kilograms")
                .await?;
            return Ok(());
        }

        let db = &ctx.data().database;
        let now = Utc::now();

        tracking::log_weight(db, weight_kg, now, notes, body_fat_percentage, muscle_mass_kg)
            .await?;
        progress::update_streaks(db, now, &ctx.data().goals).await?;
        progress::check_achievements(db).await?;

        ctx.say(format!("✅ Logged weight: {weight_kg:.1} kg")).await?;
        Ok(())
    }

    /// Logs water intake and shows today's running total.
    #[poise::command(slash_command, prefix_command)]
    pub async fn water(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Amount in milliliters"] amount_ml: f64,
    ) -> Result<()> {
        if !amount_ml.is_finite() || amount_ml <= 0.0 {
            ctx.say("❌ Invalid amount: must be a positive number of milliliters")
                .await?;
            return Ok(());
        }

        let db = &ctx.data().database;
        let now = Utc::now();

        tracking::log_water(db, amount_ml, now).await?;
        progress::update_streaks(db, now, &ctx.data().goals).await?;
        progress::check_achievements(db).await?;

        let today_total = tracking::get_water_for_day(db, now).await?;
        let goal = ctx.data().goals.daily_water_ml;

        ctx.say(format!(
            "✅ Logged {amount_ml:.0} ml of water, {today_total:.0} / {goal:.0} ml today"
        ))
        .await?;
        Ok(())
    }

    /// Logs an exercise session.
    #[poise::command(slash_command, prefix_command)]
    pub async fn exercise(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Exercise name (e.g. 'Running')"] name: String,
        #[description = "Duration in minutes"] duration_min: f64,
        #[description = "Type (cardio, strength, flexibility, sports)"] exercise_type: Option<
            String,
        >,
        #[description = "Estimated calories burned"] calories_burned: Option<f64>,
        #[description = "Optional notes"] notes: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let exercise_type = exercise_type.unwrap_or_else(|| "cardio".to_string());
        let calories_burned = calories_burned.unwrap_or(0.0);

        match tracking::log_exercise(
            db,
            name,
            exercise_type,
            duration_min,
            calories_burned,
            Utc::now(),
            notes,
        )
        .await
        {
            Ok(entry) => {
                let mut reply = format!(
                    "✅ Logged {:.0} min of {} ({})",
                    entry.duration_min, entry.name, entry.exercise_type
                );
                if entry.calories_burned > 0.0 {
                    reply.push_str(&format!(", ~{:.0} kcal burned", entry.calories_burned));
                }
                ctx.say(reply).await?;
            }
            Err(Error::Config { message }) => {
                ctx.say(format!("❌ {message}")).await?;
            }
            Err(Error::InvalidQuantity { quantity }) => {
                ctx.say(format!("❌ Invalid duration: {quantity}")).await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Shows today's calorie progress, water intake, and streaks.
    #[poise::command(slash_command, prefix_command)]
    pub async fn progress(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;
        let goals = &ctx.data().goals;
        let now = Utc::now();
        let today = meals::day_bucket(now);

        let calorie = progress::get_calorie_progress(db, today, goals.daily_calories).await?;
        let water = tracking::get_water_for_day(db, now).await?;
        let streaks = progress::get_streaks(db).await?;

        let bar = progress::format_progress_bar(calorie.percent_complete, None);
        let mut reply = format!(
            "**Calories** {bar}\n{:.0} / {:.0} kcal consumed, {:.0} remaining",
            calorie.consumed, calorie.goal, calorie.remaining
        );
        if calorie.consumed > calorie.goal {
            reply.push_str(&format!(
                " ({:.0} over goal)",
                calorie.consumed - calorie.goal
            ));
        }
        reply.push_str(&format!(
            "\n**Water**: {water:.0} / {:.0} ml",
            goals.daily_water_ml
        ));

        let weights = tracking::get_weight_progress(db).await?;
        if !weights.is_empty() {
            reply.push_str("\n**Recent weight**:");
            for entry in weights.iter().take(5) {
                reply.push_str(&format!(
                    "\n• {}: {:.1} kg",
                    meals::day_bucket(entry.date),
                    entry.weight_kg
                ));
            }
        }

        if !streaks.is_empty() {
            reply.push_str("\n**Streaks**:");
            for streak in streaks {
                reply.push_str(&format!(
                    "\n• {}: {} day(s), best {}",
                    streak.goal_kind, streak.current, streak.best
                ));
            }
        }

        ctx.say(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
