//! Streak state entity - Consecutive-day counters per goal kind.
//!
//! One row per goal kind (`"calorie"`, `"water"`, `"weight"`), maintained by
//! the aggregation engine after every logging action. `last_qualified` keeps
//! same-day rechecks idempotent.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Streak state database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "streak_states")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Goal kind this streak tracks: `"calorie"`, `"water"`, or `"weight"`
    #[sea_orm(unique)]
    pub goal_kind: String,
    /// Current consecutive qualifying days
    pub current: i64,
    /// Best streak ever reached
    pub best: i64,
    /// Last day that qualified, if any
    pub last_qualified: Option<Date>,
}

/// `StreakState` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
