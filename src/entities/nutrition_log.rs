//! Nutrition log entity - One row per calendar day of logged meals.
//!
//! The cached `total_*` columns must always equal the field-wise sum over the
//! day's meal entries. Only `core::meals` writes them, and it always performs
//! a full recompute rather than an incremental adjustment.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Daily nutrition log database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "nutrition_logs")]
pub struct Model {
    /// Unique identifier for the log
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day bucket this log covers (local calendar day)
    #[sea_orm(unique)]
    pub date: Date,
    /// Cached sum of meal calories for the day
    pub total_calories: f64,
    /// Cached sum of meal protein in grams
    pub total_protein_g: f64,
    /// Cached sum of meal carbohydrates in grams
    pub total_carbs_g: f64,
    /// Cached sum of meal fat in grams
    pub total_fat_g: f64,
    /// Cached sum of meal fiber in grams
    pub total_fiber_g: f64,
    /// Water intake carried on the log (imports only; daily water totals are
    /// always recomputed from the water ledger)
    pub water_intake_ml: f64,
}

/// Defines relationships between `NutritionLog` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One log owns many meal entries
    #[sea_orm(has_many = "super::meal_entry::Entity")]
    MealEntries,
}

impl Related<super::meal_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
