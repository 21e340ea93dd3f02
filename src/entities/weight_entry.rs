//! Weight entry entity - Independent body-weight ledger.
//!
//! Not tied to nutrition logs. Reads order descending by date with id as the
//! tiebreaker, so same-day entries keep insertion order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Weight entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weight_entries")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// When the weight was measured
    pub date: DateTimeUtc,
    /// Optional free-form note
    pub notes: Option<String>,
    /// Optional body fat percentage
    pub body_fat_percentage: Option<f64>,
    /// Optional muscle mass in kilograms
    pub muscle_mass_kg: Option<f64>,
}

/// `WeightEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
