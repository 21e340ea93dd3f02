//! Seed food catalog loading from config.toml.
//!
//! The `[[foods]]` entries in config.toml are used to seed the catalog on
//! startup. Seeding is idempotent: foods whose name already exists in the
//! database are skipped, so user edits and custom foods survive restarts.

use crate::entities::{FoodItem, food_item};
use crate::errors::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use tracing::info;

/// Configuration for a single seed food
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FoodConfig {
    /// Name of the food
    pub name: String,
    /// Optional brand
    pub brand: Option<String>,
    /// Category (e.g., "Fruits", "Protein")
    pub category: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving in grams
    pub protein_g: f64,
    /// Carbohydrates per serving in grams
    pub carbs_g: f64,
    /// Fat per serving in grams
    pub fat_g: f64,
    /// Fiber per serving in grams
    pub fiber_g: f64,
    /// Sugar per serving in grams, if known
    pub sugar_g: Option<f64>,
    /// Sodium per serving in milligrams, if known
    pub sodium_mg: Option<f64>,
    /// Cholesterol per serving in milligrams, if known
    pub cholesterol_mg: Option<f64>,
    /// Serving size label (e.g., "1 medium apple")
    pub serving_size: String,
    /// Serving size in grams
    pub serving_size_grams: f64,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            brand: None,
            category: "Other".to_string(),
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            fiber_g: 0.0,
            sugar_g: None,
            sodium_mg: None,
            cholesterol_mg: None,
            serving_size: "100g".to_string(),
            serving_size_grams: 100.0,
        }
    }
}

/// Seeds the food catalog from configuration, skipping foods that already exist.
///
/// Seeded foods are marked `verified` and not custom.
pub async fn seed_food_catalog(db: &DatabaseConnection, foods: &[FoodConfig]) -> Result<usize> {
    let mut seeded = 0;

    for food in foods {
        if food.name.trim().is_empty() || food.serving_size_grams <= 0.0 {
            info!("Skipping invalid seed food entry: {:?}", food.name);
            continue;
        }

        let existing = FoodItem::find()
            .filter(food_item::Column::Name.eq(food.name.as_str()))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        let model = food_item::ActiveModel {
            name: Set(food.name.trim().to_string()),
            brand: Set(food.brand.clone()),
            category: Set(food.category.clone()),
            calories: Set(food.calories),
            protein_g: Set(food.protein_g),
            carbs_g: Set(food.carbs_g),
            fat_g: Set(food.fat_g),
            fiber_g: Set(food.fiber_g),
            sugar_g: Set(food.sugar_g),
            sodium_mg: Set(food.sodium_mg),
            cholesterol_mg: Set(food.cholesterol_mg),
            serving_size: Set(food.serving_size.clone()),
            serving_size_grams: Set(food.serving_size_grams),
            is_custom: Set(false),
            verified: Set(true),
            ..Default::default()
        };
        model.insert(db).await?;
        seeded += 1;
    }

    if seeded > 0 {
        info!("Seeded {seeded} foods into the catalog");
    }
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::setup_test_db;

    fn apple_config() -> FoodConfig {
        FoodConfig {
            name: "Apple".to_string(),
            category: "Fruits".to_string(),
            calories: 95.0,
            protein_g: 0.5,
            carbs_g: 25.0,
            fat_g: 0.3,
            fiber_g: 4.0,
            sugar_g: Some(19.0),
            serving_size: "1 medium apple".to_string(),
            serving_size_grams: 182.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_food_config() {
        let toml_str = r#"
            [[foods]]
            name = "Apple"
            category = "Fruits"
            calories = 95.0
            protein_g = 0.5
            carbs_g = 25.0
            fat_g = 0.3
            fiber_g = 4.0
            sugar_g = 19.0
            serving_size = "1 medium apple"
            serving_size_grams = 182.0

            [[foods]]
            name = "Bread"
            category = "Grains"
            calories = 75.0
            protein_g = 2.6
            carbs_g = 14.0
            fat_g = 0.9
            fiber_g = 0.8
            serving_size = "1 slice"
            serving_size_grams = 28.0
        "#;

        let config: crate::config::AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.foods.len(), 2);
        assert_eq!(config.foods[0].name, "Apple");
        assert_eq!(config.foods[0].serving_size_grams, 182.0);
        assert_eq!(config.foods[1].name, "Bread");
        assert_eq!(config.foods[1].serving_size_grams, 28.0);
        // Goals section absent falls back to defaults
        assert_eq!(config.goals.daily_calories, 2000.0);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let foods = vec![apple_config()];

        let first = seed_food_catalog(&db, &foods).await?;
        assert_eq!(first, 1);

        let second = seed_food_catalog(&db, &foods).await?;
        assert_eq!(second, 0);

        let all = FoodItem::find().all(&db).await?;
        assert_eq!(all.len(), 1);
        assert!(all[0].verified);
        assert!(!all[0].is_custom);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_skips_invalid_entries() -> Result<()> {
        let db = setup_test_db().await?;
        let mut bad = apple_config();
        bad.serving_size_grams = 0.0;

        let seeded = seed_food_catalog(&db, &[bad, FoodConfig::default()]).await?;
        assert_eq!(seeded, 0);

        Ok(())
    }
}
