//! Exercise entry entity - Independent exercise ledger.
//!
//! Kept as a plain append-only ledger; exercise calories are not folded back
//! into nutrition log totals.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Exercise entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercise_entries")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the activity (e.g., "Running")
    pub name: String,
    /// Activity type: `"cardio"`, `"strength"`, `"flexibility"`, or `"sports"`
    pub exercise_type: String,
    /// Duration in minutes
    pub duration_min: f64,
    /// Estimated calories burned
    pub calories_burned: f64,
    /// When the exercise happened
    pub date: DateTimeUtc,
    /// Optional free-form note
    pub notes: Option<String>,
}

/// `ExerciseEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
