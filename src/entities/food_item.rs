//! Food item entity - Represents one entry in the food catalog.
//!
//! Nutrition columns describe a single serving of `serving_size_grams` grams.
//! Catalog entries are immutable once created and are never deleted in the
//! normal flow; meal entries carry their own frozen nutrition snapshot, so a
//! food row may safely outlive any edit to the catalog.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Food catalog database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_items")]
pub struct Model {
    /// Unique identifier for the food
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name (e.g., "Apple", "Chicken Breast (Skinless)")
    pub name: String,
    /// Optional brand name for packaged foods
    pub brand: Option<String>,
    /// Category for organization (e.g., "Fruits", "Protein", "Grains")
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
    /// Serving size label (e.g., `"1 medium apple"`, `"100g"`)
    pub serving_size: String,
    /// Numeric serving size base in grams; the scaling denominator
    pub serving_size_grams: f64,
    /// Whether this food was created by a user (true) or seeded (false)
    pub is_custom: bool,
    /// Whether this entry has been catalog-reviewed
    pub verified: bool,
}

/// Defines relationships between `FoodItem` and other entities
///
/// Meal entries reference foods only through a weak `food_id` kept for audit
/// purposes; entries carry their own snapshot and never dereference back, so
/// no relation (and no foreign key) is declared.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
