//! Unified error type for all `NutriBuddy` operations.
//!
//! Every fallible function in the crate returns [`Result`]. Gemini service
//! failures are a special case: they never escape the natural-language parse
//! path, which degrades to the deterministic fallback parser instead.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or validation failure.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A quantity (grams, milliliters, kilograms) was zero, negative, or not finite.
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected value
        quantity: f64,
    },

    /// No food in the catalog matched the given name or id.
    #[error("Food not found: {name}")]
    FoodNotFound {
        /// Name or id the lookup used
        name: String,
    },

    /// No meal entry exists with the given id.
    #[error("Meal entry not found: {id}")]
    MealEntryNotFound {
        /// The missing entry id
        id: i64,
    },

    /// No feature request exists with the given id.
    #[error("Feature request not found: {id}")]
    FeatureRequestNotFound {
        /// The missing request id
        id: i64,
    },

    /// A meal-entry update tried to move the entry into a different day bucket.
    #[error("Meal entry {id} cannot be moved to a different day; delete and re-log instead")]
    CrossDayUpdate {
        /// The entry whose timestamp change was rejected
        id: i64,
    },

    /// Database error from `SeaORM`.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error talking to the Gemini API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Gemini API was unavailable, disabled, or returned an unusable response.
    #[error("AI service error: {message}")]
    AiService {
        /// What the service call failed on
        message: String,
    },

    /// Serenity/Poise framework error.
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
