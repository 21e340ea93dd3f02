//! Feature request entity - The community voting board.
//!
//! Created by explicit command or as a side effect of natural-language input
//! classified as a feature ask. Votes start at 1 (the requester's own vote).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Feature request database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feature_requests")]
pub struct Model {
    /// Unique identifier for the request
    #[sea_orm(primary_key)]
    pub id: i64,
    /// What the user asked for
    pub description: String,
    /// Category: `"tracking"`, `"analysis"`, `"planning"`, `"social"`,
    /// `"ui"`, or `"integration"`
    pub category: String,
    /// Priority: `"low"`, `"medium"`, or `"high"`
    pub priority: String,
    /// Status: `"pending"`, `"in-progress"`, `"completed"`, or `"rejected"`
    pub status: String,
    /// When the request was filed
    pub requested_at: DateTimeUtc,
    /// Vote count, starts at 1
    pub votes: i64,
}

/// `FeatureRequest` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
