//! Meal entry entity - One logged consumption event.
//!
//! The nutrition columns are a snapshot scaled to `quantity_grams` at logging
//! time (factor = quantity / `serving_size_grams` of the source food). The
//! snapshot is frozen: it is never recomputed if the source food changes, and
//! `food_id` is a weak reference kept only for audit purposes. `food_name` is
//! denormalized for the same reason.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Meal entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meal_entries")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the nutrition log (day bucket) this entry belongs to
    pub log_id: i64,
    /// Weak reference to the catalog food this entry was logged from
    pub food_id: i64,
    /// Food name snapshot, preserved even if the catalog entry changes
    pub food_name: String,
    /// Consumed quantity in grams
    pub quantity_grams: f64,
    /// Meal slot: `"breakfast"`, `"lunch"`, `"dinner"`, or `"snack"`
    pub meal_type: String,
    /// When the meal was consumed
    pub timestamp: DateTimeUtc,
    /// Calories snapshot scaled to `quantity_grams`
    pub calories: f64,
    /// Protein snapshot in grams
    pub protein_g: f64,
    /// Carbohydrates snapshot in grams
    pub carbs_g: f64,
    /// Fat snapshot in grams
    pub fat_g: f64,
    /// Fiber snapshot in grams
    pub fiber_g: f64,
    /// Optional free-form note
    pub notes: Option<String>,
}

/// Defines relationships between `MealEntry` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each entry belongs to one nutrition log
    #[sea_orm(
        belongs_to = "super::nutrition_log::Entity",
        from = "Column::LogId",
        to = "super::nutrition_log::Column::Id"
    )]
    NutritionLog,
}

impl Related<super::nutrition_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NutritionLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
