//! Feature request voting board.
//!
//! Requests are append-only: no edit, delete, or status-transition surface.
//! Votes accumulate monotonically via an atomic column update so concurrent
//! votes never lose increments.

use crate::{
    entities::{FeatureRequest, feature_request},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::Expr};

/// The closed set of categories a request may carry.
pub const FEATURE_CATEGORIES: [&str; 6] = [
    "tracking",
    "analysis",
    "planning",
    "social",
    "ui",
    "integration",
];

/// Files a new feature request.
///
/// Every request starts at priority `medium`, status `pending`, and one vote
/// (the requester's own). Unknown categories fall back to `tracking`.
pub async fn request_feature(
    db: &DatabaseConnection,
    description: String,
    category: &str,
) -> Result<feature_request::Model> {
    if description.trim().is_empty() {
        return Err(Error::Config {
            message: "Feature description cannot be empty".to_string(),
        });
    }

    let category = if FEATURE_CATEGORIES.contains(&category) {
        category
    } else {
        "tracking"
    };

    let request = feature_request::ActiveModel {
        description: Set(description.trim().to_string()),
        category: Set(category.to_string()),
        priority: Set("medium".to_string()),
        status: Set("pending".to_string()),
        requested_at: Set(Utc::now()),
        votes: Set(1),
        ..Default::default()
    };

    let result = request.insert(db).await?;
    Ok(result)
}

/// Adds one vote to a request atomically and returns the updated row.
pub async fn vote_feature(db: &DatabaseConnection, id: i64) -> Result<feature_request::Model> {
    let existing = FeatureRequest::find_by_id(id).one(db).await?;
    if existing.is_none() {
        return Err(Error::FeatureRequestNotFound { id });
    }

    // Atomic update: votes = votes + 1
    FeatureRequest::update_many()
        .col_expr(
            feature_request::Column::Votes,
            Expr::col(feature_request::Column::Votes).add(1),
        )
        .filter(feature_request::Column::Id.eq(id))
        .exec(db)
        .await?;

    FeatureRequest::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::FeatureRequestNotFound { id })
}

/// Lists all requests, most-voted first; ties resolve oldest-first.
pub async fn list_feature_requests(
    db: &DatabaseConnection,
) -> Result<Vec<feature_request::Model>> {
    FeatureRequest::find()
        .order_by_desc(feature_request::Column::Votes)
        .order_by_asc(feature_request::Column::RequestedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_request_feature_defaults() -> Result<()> {
        let db = setup_test_db().await?;

        let request = request_feature(&db, "Barcode scanning".to_string(), "tracking").await?;
        assert_eq!(request.priority, "medium");
        assert_eq!(request.status, "pending");
        assert_eq!(request.votes, 1);
        assert_eq!(request.category, "tracking");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_category_falls_back_to_tracking() -> Result<()> {
        let db = setup_test_db().await?;

        let request = request_feature(&db, "Dark mode".to_string(), "cosmetics").await?;
        assert_eq!(request.category, "tracking");

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_description_rejected() -> Result<()> {
        let db = setup_test_db().await?;

        let result = request_feature(&db, "   ".to_string(), "ui").await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_vote_increments() -> Result<()> {
        let db = setup_test_db().await?;
        let request = request_feature(&db, "Meal photos".to_string(), "tracking").await?;

        let voted = vote_feature(&db, request.id).await?;
        assert_eq!(voted.votes, 2);
        let voted = vote_feature(&db, request.id).await?;
        assert_eq!(voted.votes, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_vote_missing_request() -> Result<()> {
        let db = setup_test_db().await?;

        let result = vote_feature(&db, 42).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::FeatureRequestNotFound { id: 42 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_ordering_votes_then_age() -> Result<()> {
        let db = setup_test_db().await?;

        let first = request_feature(&db, "Recipe sharing".to_string(), "social").await?;
        let second = request_feature(&db, "Macro charts".to_string(), "analysis").await?;
        let third = request_feature(&db, "CSV export".to_string(), "integration").await?;
        vote_feature(&db, second.id).await?;

        let list = list_feature_requests(&db).await?;
        assert_eq!(list[0].id, second.id);
        // Equal votes resolve oldest-first
        assert_eq!(list[1].id, first.id);
        assert_eq!(list[2].id, third.id);

        Ok(())
    }
}
