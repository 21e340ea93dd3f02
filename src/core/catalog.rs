//! Food catalog business logic - Handles catalog lookups and nutrition scaling.
//!
//! The catalog is consulted only when a meal is logged; the resulting scaled
//! snapshot is embedded in the meal entry and never recomputed afterwards,
//! even if the catalog entry changes. Catalog entries are immutable once
//! created and are never deleted in the normal flow.

use crate::{
    entities::{FoodItem, food_item},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};

/// Parameters for creating a custom food.
#[derive(Debug, Clone, Default)]
pub struct NewFood {
    /// Food name (required, non-empty)
    pub name: String,
    /// Optional brand
    pub brand: Option<String>,
    /// Category (e.g., "Fruits")
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
    /// Serving size base in grams (required, positive)
    pub serving_size_grams: f64,
}

/// A nutrition snapshot scaled to a consumed quantity.
///
/// The `serving_size` fields describe the consumed quantity itself
/// (`"250g"` / `250.0`), not the catalog serving, matching how logged entries
/// and daily aggregates label themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionSnapshot {
    /// Scaled calories, rounded to the nearest integer
    pub calories: f64,
    /// Scaled protein in grams, rounded to one decimal place
    pub protein_g: f64,
    /// Scaled carbohydrates in grams, rounded to one decimal place
    pub carbs_g: f64,
    /// Scaled fat in grams, rounded to one decimal place
    pub fat_g: f64,
    /// Scaled fiber in grams, rounded to one decimal place
    pub fiber_g: f64,
    /// Label for the consumed quantity (e.g., `"250g"`)
    pub serving_size: String,
    /// The consumed quantity in grams
    pub serving_size_grams: f64,
}

/// Scales a food's per-serving nutrition facts to a consumed quantity.
///
/// The scaling factor is `quantity_grams / food.serving_size_grams`. Calories
/// round to the nearest integer; gram fields round to one decimal place.
pub fn scale_nutrition(food: &food_item::Model, quantity_grams: f64) -> NutritionSnapshot {
    let factor = quantity_grams / food.serving_size_grams;
    let one_dp = |v: f64| (v * factor * 10.0).round() / 10.0;

    NutritionSnapshot {
        calories: (food.calories * factor).round(),
        protein_g: one_dp(food.protein_g),
        carbs_g: one_dp(food.carbs_g),
        fat_g: one_dp(food.fat_g),
        fiber_g: one_dp(food.fiber_g),
        serving_size: format!("{quantity_grams}g"),
        serving_size_grams: quantity_grams,
    }
}

/// Creates a new user-defined food in the catalog.
///
/// Validates that the name is non-empty and the serving size base is a
/// positive, finite number of grams. User foods are flagged `is_custom` and
/// start unverified.
pub async fn create_food(db: &DatabaseConnection, new: NewFood) -> Result<food_item::Model> {
    if new.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Food name cannot be empty".to_string(),
        });
    }

    if !new.serving_size_grams.is_finite() || new.serving_size_grams <= 0.0 {
        return Err(Error::InvalidQuantity {
            quantity: new.serving_size_grams,
        });
    }

    let food = food_item::ActiveModel {
        name: Set(new.name.trim().to_string()),
        brand: Set(new.brand),
        category: Set(new.category),
        calories: Set(new.calories),
        protein_g: Set(new.protein_g),
        carbs_g: Set(new.carbs_g),
        fat_g: Set(new.fat_g),
        fiber_g: Set(new.fiber_g),
        sugar_g: Set(new.sugar_g),
        sodium_mg: Set(new.sodium_mg),
        cholesterol_mg: Set(new.cholesterol_mg),
        serving_size: Set(new.serving_size),
        serving_size_grams: Set(new.serving_size_grams),
        is_custom: Set(true),
        verified: Set(false),
        ..Default::default()
    };

    let result = food.insert(db).await?;
    Ok(result)
}

/// Searches the catalog by case-insensitive substring match on name,
/// category, or brand, ordered alphabetically by name.
pub async fn search_foods(db: &DatabaseConnection, query: &str) -> Result<Vec<food_item::Model>> {
    FoodItem::find()
        .filter(
            Condition::any()
                .add(food_item::Column::Name.contains(query))
                .add(food_item::Column::Category.contains(query))
                .add(food_item::Column::Brand.contains(query)),
        )
        .order_by_asc(food_item::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a food by its unique ID.
pub async fn get_food_by_id(
    db: &DatabaseConnection,
    food_id: i64,
) -> Result<Option<food_item::Model>> {
    FoodItem::find_by_id(food_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the whole catalog ordered alphabetically, used for autocomplete.
pub async fn get_all_foods(db: &DatabaseConnection) -> Result<Vec<food_item::Model>> {
    FoodItem::find()
        .order_by_asc(food_item::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_test_food, setup_test_db, test_apple};

    #[test]
    fn test_scale_nutrition_double_serving() {
        let apple = test_apple();
        // quantity = 2 x serving base doubles every field
        let snapshot = scale_nutrition(&apple, 364.0);

        assert_eq!(snapshot.calories, 190.0);
        assert_eq!(snapshot.protein_g, 1.0);
        assert_eq!(snapshot.carbs_g, 50.0);
        assert_eq!(snapshot.fat_g, 0.6);
        assert_eq!(snapshot.fiber_g, 8.0);
        assert_eq!(snapshot.serving_size, "364g");
        assert_eq!(snapshot.serving_size_grams, 364.0);
    }

    #[test]
    fn test_scale_nutrition_rounding() {
        let apple = test_apple();
        // 100g of a 182g serving: factor ~= 0.5495
        let snapshot = scale_nutrition(&apple, 100.0);

        assert_eq!(snapshot.calories, 52.0); // 95 * 0.5495 = 52.2 -> 52
        assert_eq!(snapshot.protein_g, 0.3); // 0.5 * 0.5495 = 0.27 -> 0.3
        assert_eq!(snapshot.carbs_g, 13.7); // 25 * 0.5495 = 13.74 -> 13.7
        assert_eq!(snapshot.fiber_g, 2.2); // 4 * 0.5495 = 2.198 -> 2.2
    }

    #[tokio::test]
    async fn test_create_food_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_food(
            &db,
            NewFood {
                name: "   ".to_string(),
                serving_size_grams: 100.0,
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = create_food(
            &db,
            NewFood {
                name: "Oats".to_string(),
                serving_size_grams: 0.0,
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidQuantity { quantity: 0.0 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_food_is_custom_and_unverified() -> Result<()> {
        let db = setup_test_db().await?;

        let food = create_food(
            &db,
            NewFood {
                name: "Homemade Granola".to_string(),
                category: "Grains".to_string(),
                calories: 450.0,
                serving_size: "1 cup".to_string(),
                serving_size_grams: 120.0,
                ..Default::default()
            },
        )
        .await?;

        assert!(food.is_custom);
        assert!(!food.verified);
        assert_eq!(food.name, "Homemade Granola");

        Ok(())
    }

    #[tokio::test]
    async fn test_search_foods_matches_name_category_brand() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_food(&db, "Apple").await?;

        let by_name = search_foods(&db, "apple").await?;
        assert_eq!(by_name.len(), 1);

        let by_category = search_foods(&db, "fruit").await?;
        assert_eq!(by_category.len(), 1);

        let none = search_foods(&db, "pizza").await?;
        assert!(none.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_food_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let apple = create_test_food(&db, "Apple").await?;

        let found = get_food_by_id(&db, apple.id).await?;
        assert_eq!(found.unwrap().id, apple.id);

        let missing = get_food_by_id(&db, 999).await?;
        assert!(missing.is_none());

        Ok(())
    }
}
