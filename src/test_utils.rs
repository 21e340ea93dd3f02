//! Shared test utilities for `NutriBuddy`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{catalog, meals},
    entities,
    errors::Result,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A medium apple as a plain catalog model, for pure scaling tests.
///
/// Per 182g serving: 95 kcal, 0.5g protein, 25g carbs, 0.3g fat, 4g fiber.
#[must_use]
pub fn test_apple() -> entities::food_item::Model {
    entities::food_item::Model {
        id: 1,
        name: "Apple".to_string(),
        brand: None,
        category: "Fruits".to_string(),
        calories: 95.0,
        protein_g: 0.5,
        carbs_g: 25.0,
        fat_g: 0.3,
        fiber_g: 4.0,
        sugar_g: Some(19.0),
        sodium_mg: Some(2.0),
        cholesterol_mg: None,
        serving_size: "1 medium apple".to_string(),
        serving_size_grams: 182.0,
        is_custom: false,
        verified: true,
    }
}

/// Creates a test food with apple-like defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `name` - Food name
///
/// # Defaults
/// * `category`: "Fruits"
/// * nutrition: the [`test_apple`] facts (95 kcal per 182g serving)
pub async fn create_test_food(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::food_item::Model> {
    let apple = test_apple();
    catalog::create_food(
        db,
        catalog::NewFood {
            name: name.to_string(),
            brand: None,
            category: apple.category,
            calories: apple.calories,
            protein_g: apple.protein_g,
            carbs_g: apple.carbs_g,
            fat_g: apple.fat_g,
            fiber_g: apple.fiber_g,
            sugar_g: apple.sugar_g,
            sodium_mg: apple.sodium_mg,
            cholesterol_mg: apple.cholesterol_mg,
            serving_size: apple.serving_size,
            serving_size_grams: apple.serving_size_grams,
        },
    )
    .await
}

/// Creates a test food with custom nutrition facts.
/// Use this when a test needs specific per-serving values.
pub async fn create_custom_food(
    db: &DatabaseConnection,
    name: &str,
    calories: f64,
    serving_size_grams: f64,
) -> Result<entities::food_item::Model> {
    catalog::create_food(
        db,
        catalog::NewFood {
            name: name.to_string(),
            category: "Other".to_string(),
            calories,
            serving_size: format!("{serving_size_grams}g"),
            serving_size_grams,
            ..Default::default()
        },
    )
    .await
}

/// Logs a test meal with sensible defaults.
///
/// # Defaults
/// * `meal_type`: Snack
/// * `timestamp`: now
/// * `notes`: None
pub async fn log_test_meal(
    db: &DatabaseConnection,
    food: &entities::food_item::Model,
    quantity_grams: f64,
) -> Result<entities::meal_entry::Model> {
    meals::log_meal(
        db,
        food,
        quantity_grams,
        meals::MealType::Snack,
        Utc::now(),
        None,
    )
    .await
}

/// Sets up a complete test environment with an apple in the catalog.
/// Returns (db, food) for common test scenarios.
pub async fn setup_with_food() -> Result<(DatabaseConnection, entities::food_item::Model)> {
    let db = setup_test_db().await?;
    let food = create_test_food(&db, "Apple").await?;
    Ok((db, food))
}
