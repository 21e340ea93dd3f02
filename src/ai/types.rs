//! Typed decode boundary for Gemini responses.
//!
//! Gemini returns free-form text that is expected to contain JSON. Everything
//! crossing that boundary is decoded into the closed types below; a decode
//! failure on the parse path feeds the deterministic fallback, never the
//! caller.

use crate::core::meals::MealType;
use serde::{Deserialize, Serialize};

/// Structured result of natural-language parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedInput {
    /// Food mentions with estimated quantities
    #[serde(default)]
    pub foods: Vec<ParsedFood>,
    /// Non-food actions the user asked for
    #[serde(default)]
    pub actions: Vec<ParsedAction>,
    /// Brief description of what the user wants
    #[serde(default)]
    pub intent: String,
    /// Overall parse confidence in `[0, 1]`
    #[serde(default)]
    pub confidence: f64,
}

/// One food mention extracted from free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFood {
    /// Food name, resolved against the catalog at dispatch time
    pub name: String,
    /// Estimated quantity in grams
    pub quantity_grams: f64,
    /// Unit label, always `"grams"` in practice
    #[serde(default)]
    pub unit: String,
    /// Meal slot if the text mentioned one
    #[serde(default)]
    pub meal_type: Option<MealType>,
    /// Per-food confidence in `[0, 1]`
    pub confidence: f64,
}

/// Closed tagged union of non-food actions.
///
/// Decoded from `{"type": "...", "data": {...}}`; unknown action kinds fail
/// the decode, which on the parse path means the fallback takes over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ParsedAction {
    /// Food logging marker; a no-op at dispatch since foods carry their own entries
    LogFood {},
    /// Log a water intake event
    LogWater {
        /// Amount in milliliters
        amount_ml: f64,
    },
    /// Log a weight measurement
    LogWeight {
        /// Weight in kilograms
        weight_kg: f64,
    },
    /// File a feature request
    RequestFeature {
        /// The request text, usually the full input
        description: String,
    },
    /// Ask to change the daily calorie goal
    SetGoal {
        /// Requested goal in calories
        daily_calories: f64,
    },
}

/// One recipe suggestion from [`generate_recipes`](crate::ai::GeminiClient::generate_recipes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSuggestion {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// One of `easy`, `medium`, `hard`
    pub difficulty: String,
    pub prep_time: String,
    pub cook_time: String,
    /// Calories per serving
    pub calories: f64,
    pub servings: u32,
    pub nutrition_info: MacroStrings,
}

/// Per-serving macros as display strings (e.g., `"12g"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroStrings {
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
}

/// User profile fed into diet-plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietProfile {
    pub age: u32,
    pub gender: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    pub activity_level: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub goals: String,
}

impl DietProfile {
    /// Body mass index from the profile's height and weight.
    #[must_use]
    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_cm / 100.0).powi(2)
    }
}

/// A generated diet plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub daily_calories: f64,
    pub macro_split: MacroSplit,
    #[serde(default)]
    pub recommendations: Vec<DietRecommendation>,
}

/// Daily macro targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// One meal-category recommendation inside a diet plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietRecommendation {
    pub category: String,
    #[serde(default)]
    pub foods: Vec<String>,
    #[serde(default)]
    pub reason: String,
}

/// One line item extracted from a receipt image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub name: String,
    pub quantity: f64,
    pub price: f64,
}

impl ReceiptItem {
    /// Whether the decoded item is usable: non-empty name, positive
    /// quantity, non-negative price.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty() && self.quantity > 0.0 && self.price >= 0.0
    }
}

/// Strips markdown code-fence artifacts (```` ```json ````, ```` ``` ````)
/// that Gemini wraps around JSON payloads.
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
