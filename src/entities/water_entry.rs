//! Water entry entity - Append-only water intake ledger.
//!
//! Daily totals are always derived by summing entries whose timestamp falls
//! within the requested calendar day; nothing is cached here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Water entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "water_entries")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Amount of water in milliliters
    pub amount_ml: f64,
    /// When the water was logged
    pub timestamp: DateTimeUtc,
}

/// `WaterEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
