//! Dispatch of parsed intents onto the core ledgers.
//!
//! Foods resolve against the catalog by name search, first match wins; an
//! unmatched food is never auto-created, it is dropped with a warning and
//! surfaced in the summary. Every dispatch ends with a streak and
//! achievement recheck, mirroring the direct slash-command paths.

use crate::{
    ai::{
        GeminiClient,
        types::{ParsedAction, ParsedInput},
    },
    config::goals::GoalsConfig,
    core::{catalog, features, meals, progress, tracking},
    errors::Result,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;

/// What a natural-language dispatch actually did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchSummary {
    /// Meals logged from resolved food mentions
    pub meals_logged: usize,
    /// Food names that matched nothing in the catalog
    pub unmatched_foods: Vec<String>,
    /// Water events logged
    pub water_logged: usize,
    /// Weight measurements logged
    pub weights_logged: usize,
    /// Feature requests filed
    pub features_requested: usize,
    /// The parser's description of the user's intent
    pub intent: String,
}

/// Parses free text and applies every resulting action to the ledgers.
pub async fn process_input(
    db: &DatabaseConnection,
    client: &GeminiClient,
    input: &str,
    goals: &GoalsConfig,
) -> Result<DispatchSummary> {
    let parsed = client.parse_natural_language(input).await;
    apply(db, &parsed, goals).await
}

/// Applies an already-parsed input. Split out so tests can drive dispatch
/// with a hand-built [`ParsedInput`].
pub async fn apply(
    db: &DatabaseConnection,
    parsed: &ParsedInput,
    goals: &GoalsConfig,
) -> Result<DispatchSummary> {
    let now = Utc::now();
    let mut summary = DispatchSummary {
        intent: parsed.intent.clone(),
        ..Default::default()
    };

    for action in &parsed.actions {
        match action {
            // Foods carry their own entries below
            ParsedAction::LogFood {} => {}
            ParsedAction::LogWater { amount_ml } => {
                tracking::log_water(db, *amount_ml, now).await?;
                summary.water_logged += 1;
            }
            ParsedAction::LogWeight { weight_kg } => {
                tracking::log_weight(db, *weight_kg, now, None, None, None).await?;
                summary.weights_logged += 1;
            }
            ParsedAction::RequestFeature { description } => {
                features::request_feature(db, description.clone(), "tracking").await?;
                summary.features_requested += 1;
            }
            ParsedAction::SetGoal { daily_calories } => {
                // The daily goal is injected configuration, not stored state
                tracing::info!(
                    daily_calories,
                    "goal change requested; goals live in config.toml"
                );
            }
        }
    }

    for food in &parsed.foods {
        let matches = catalog::search_foods(db, &food.name).await?;
        match matches.first() {
            Some(matched) => {
                let meal_type = food.meal_type.unwrap_or(meals::MealType::Snack);
                meals::log_meal(db, matched, food.quantity_grams, meal_type, now, None).await?;
                summary.meals_logged += 1;
            }
            None => {
                tracing::warn!(name = %food.name, "no catalog match for parsed food");
                summary.unmatched_foods.push(food.name.clone());
            }
        }
    }

    progress::update_streaks(db, now, goals).await?;
    progress::check_achievements(db).await?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::meals::{day_bucket, get_meals_for_date};
    use crate::core::tracking::get_water_for_day;
    use crate::entities::FeatureRequest;
    use crate::test_utils::{setup_test_db, setup_with_food};
    use sea_orm::EntityTrait;

    fn disabled_client() -> GeminiClient {
        GeminiClient::new(None)
    }

    #[tokio::test]
    async fn test_water_phrase_logs_water() -> Result<()> {
        let db = setup_test_db().await?;
        let goals = GoalsConfig::default();

        let summary =
            process_input(&db, &disabled_client(), "Add 250ml of water", &goals).await?;
        assert_eq!(summary.water_logged, 1);
        assert_eq!(summary.meals_logged, 0);

        assert_eq!(get_water_for_day(&db, Utc::now()).await?, 250.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_matched_food_logs_snack_meal() -> Result<()> {
        let (db, _apple) = setup_with_food().await?;
        let goals = GoalsConfig::default();

        let summary = process_input(
            &db,
            &disabled_client(),
            "I had a large apple and 2 slices of bread for breakfast",
            &goals,
        )
        .await?;

        // Apple resolves against the catalog; Bread has no entry and is dropped
        assert_eq!(summary.meals_logged, 1);
        assert_eq!(summary.unmatched_foods, vec!["Bread".to_string()]);

        let meals = get_meals_for_date(&db, day_bucket(Utc::now())).await?;
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].food_name, "Apple");
        assert_eq!(meals[0].quantity_grams, 182.0);
        assert_eq!(meals[0].calories, 95.0);
        assert_eq!(meals[0].meal_type, "snack");

        Ok(())
    }

    #[tokio::test]
    async fn test_weight_phrase_logs_weight() -> Result<()> {
        let db = setup_test_db().await?;
        let goals = GoalsConfig::default();

        let summary = process_input(
            &db,
            &disabled_client(),
            "my weight is 70.5kg this morning",
            &goals,
        )
        .await?;
        assert_eq!(summary.weights_logged, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_feature_phrase_files_request() -> Result<()> {
        let db = setup_test_db().await?;
        let goals = GoalsConfig::default();

        let summary = process_input(
            &db,
            &disabled_client(),
            "please add a barcode scanner feature",
            &goals,
        )
        .await?;
        assert_eq!(summary.features_requested, 1);
        assert_eq!(summary.intent, "Request new feature");

        let requests = FeatureRequest::find().all(&db).await?;
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].description,
            "please add a barcode scanner feature"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_dispatch_updates_streaks() -> Result<()> {
        let db = setup_test_db().await?;
        let goals = GoalsConfig {
            daily_water_ml: 500.0,
            ..Default::default()
        };

        process_input(&db, &disabled_client(), "Add 500ml of water", &goals).await?;

        let streaks = progress::get_streaks(&db).await?;
        let water = streaks.iter().find(|s| s.goal_kind == "water").unwrap();
        assert_eq!(water.current, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_parsed_meal_type_overrides_snack_default() -> Result<()> {
        let (db, _apple) = setup_with_food().await?;
        let goals = GoalsConfig::default();

        let parsed = ParsedInput {
            foods: vec![crate::ai::types::ParsedFood {
                name: "Apple".to_string(),
                quantity_grams: 182.0,
                unit: "grams".to_string(),
                meal_type: Some(meals::MealType::Breakfast),
                confidence: 0.9,
            }],
            actions: vec![],
            intent: "Log food items".to_string(),
            confidence: 0.9,
        };

        apply(&db, &parsed, &goals).await?;

        let meals = get_meals_for_date(&db, day_bucket(Utc::now())).await?;
        assert_eq!(meals[0].meal_type, "breakfast");

        Ok(())
    }
}
