//! Achievement entity - Unlocked achievements.
//!
//! A row exists only once an achievement unlocks; the rule table lives in
//! `core::progress`. `code` is unique so re-checks stay idempotent.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Achievement database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Stable rule code (e.g., `"calorie_streak_7"`)
    #[sea_orm(unique)]
    pub code: String,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// When the achievement unlocked
    pub unlocked_at: DateTimeUtc,
}

/// `Achievement` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
