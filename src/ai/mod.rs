//! Natural-language intent resolution over the Gemini API.
//!
//! The primary path sends free text to Gemini and decodes the response into
//! typed actions at the boundary. Any service or decode failure degrades to
//! the deterministic [`fallback`] parser; parse failures never surface to
//! callers. Generation features (recipes, diet plans, receipts) have no
//! deterministic equivalent and do surface their errors.

/// Gemini REST client
pub mod client;
/// Parsed-intent dispatch onto the core ledgers
pub mod dispatch;
/// Deterministic keyword/regex parser used when Gemini is unavailable
pub mod fallback;
/// Instructional prompt templates
pub mod prompts;
/// Typed decode boundary for Gemini responses
pub mod types;

pub use client::GeminiClient;
pub use dispatch::{DispatchSummary, process_input};
pub use types::{
    DietPlan, DietProfile, ParsedAction, ParsedFood, ParsedInput, ReceiptItem, RecipeSuggestion,
    strip_code_fences,
};
