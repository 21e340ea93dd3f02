//! Core business logic - framework-agnostic ledgers, aggregation, and reporting.
//!
//! Nothing in this module knows about Discord or the Gemini API. Functions
//! take a database connection and return plain data, so the bot layer and the
//! natural-language dispatcher share the same command surface.

/// Food catalog operations and nutrition scaling
pub mod catalog;
/// Export/import of the core ledgers as JSON
pub mod exchange;
/// Feature request voting board
pub mod features;
/// Meal ledger and per-day total maintenance
pub mod meals;
/// Calorie progress, streaks, achievements, and pattern analysis
pub mod progress;
/// Weight, water, and exercise ledgers
pub mod tracking;
