//! Deterministic keyword/regex parser used when Gemini is unavailable.
//!
//! A small fixed vocabulary with fixed confidences: 0.8 per matched food,
//! 0.6 overall. Pure function of the input, no I/O, identical output for
//! identical input.

use crate::ai::types::{ParsedAction, ParsedFood, ParsedInput};
use regex::Regex;
use std::sync::LazyLock;

static SLICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*slice").expect("valid slice regex"));
static CHICKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)g?\s*chicken").expect("valid chicken regex"));
static WATER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*ml").expect("valid water regex"));
static WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*kg").expect("valid weight regex"));

const FOOD_CONFIDENCE: f64 = 0.8;
const OVERALL_CONFIDENCE: f64 = 0.6;

fn food(name: &str, quantity_grams: f64) -> ParsedFood {
    ParsedFood {
        name: name.to_string(),
        quantity_grams,
        unit: "grams".to_string(),
        meal_type: None,
        confidence: FOOD_CONFIDENCE,
    }
}

fn captured_number(re: &Regex, haystack: &str) -> Option<f64> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parses free text against the fixed fallback vocabulary.
#[must_use]
pub fn parse(input: &str) -> ParsedInput {
    let lower = input.to_lowercase();
    let mut foods = Vec::new();
    let mut actions = Vec::new();

    if lower.contains("apple") {
        foods.push(food("Apple", 182.0));
    }

    if lower.contains("bread") {
        let slices = captured_number(&SLICE_RE, &lower).unwrap_or(1.0);
        foods.push(food("Bread", slices * 28.0));
    }

    if lower.contains("chicken") {
        let grams = captured_number(&CHICKEN_RE, &lower).unwrap_or(100.0);
        foods.push(food("Chicken Breast (Skinless)", grams));
    }

    if lower.contains("water") {
        let amount_ml = captured_number(&WATER_RE, &lower).unwrap_or(250.0);
        actions.push(ParsedAction::LogWater { amount_ml });
    }

    if lower.contains("weight") {
        if let Some(weight_kg) = captured_number(&WEIGHT_RE, &lower) {
            actions.push(ParsedAction::LogWeight { weight_kg });
        }
    }

    // "add" is too common to trigger unconditionally ("Add 250ml of water"
    // is a water log, not a feature ask); it only counts when nothing else
    // in the vocabulary matched.
    if lower.contains("feature")
        || (lower.contains("add") && foods.is_empty() && actions.is_empty())
    {
        actions.push(ParsedAction::RequestFeature {
            description: input.trim().to_string(),
        });
    }

    let intent = if lower.contains("feature") {
        "Request new feature".to_string()
    } else {
        "Log food items".to_string()
    };

    ParsedInput {
        foods,
        actions,
        intent,
        confidence: OVERALL_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_water_volume() {
        let parsed = parse("Add 250ml of water");

        assert!(parsed.foods.is_empty());
        assert_eq!(
            parsed.actions,
            vec![ParsedAction::LogWater { amount_ml: 250.0 }]
        );
        assert_eq!(parsed.confidence, 0.6);
    }

    #[test]
    fn test_apple_and_bread_slices() {
        let parsed = parse("I had a large apple and 2 slices of bread for breakfast");

        assert_eq!(parsed.foods.len(), 2);
        assert_eq!(parsed.foods[0].name, "Apple");
        assert_eq!(parsed.foods[0].quantity_grams, 182.0);
        assert_eq!(parsed.foods[1].name, "Bread");
        assert_eq!(parsed.foods[1].quantity_grams, 56.0);
        assert!(parsed.foods.iter().all(|f| f.confidence == 0.8));
        assert!(parsed.actions.is_empty());
    }

    #[test]
    fn test_water_without_volume_defaults() {
        let parsed = parse("drank some water");
        assert_eq!(
            parsed.actions,
            vec![ParsedAction::LogWater { amount_ml: 250.0 }]
        );
    }

    #[test]
    fn test_chicken_quantity() {
        let parsed = parse("200g chicken for dinner");
        assert_eq!(parsed.foods[0].name, "Chicken Breast (Skinless)");
        assert_eq!(parsed.foods[0].quantity_grams, 200.0);

        let parsed = parse("some chicken");
        assert_eq!(parsed.foods[0].quantity_grams, 100.0);
    }

    #[test]
    fn test_weight_requires_kilograms() {
        let parsed = parse("my weight is 70.5kg today");
        assert_eq!(
            parsed.actions,
            vec![ParsedAction::LogWeight { weight_kg: 70.5 }]
        );

        // A weight mention without a kg figure produces no action
        let parsed = parse("thinking about my weight");
        assert!(parsed.actions.is_empty());
    }

    #[test]
    fn test_feature_request() {
        let parsed = parse("please add a barcode scanner feature");
        assert_eq!(
            parsed.actions,
            vec![ParsedAction::RequestFeature {
                description: "please add a barcode scanner feature".to_string()
            }]
        );
        assert_eq!(parsed.intent, "Request new feature");
    }

    #[test]
    fn test_bare_add_with_no_other_match_is_a_feature_ask() {
        let parsed = parse("add dark mode please");
        assert_eq!(parsed.actions.len(), 1);
        assert!(matches!(
            parsed.actions[0],
            ParsedAction::RequestFeature { .. }
        ));
    }

    #[test]
    fn test_deterministic() {
        let input = "I had a large apple and 2 slices of bread for breakfast";
        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn test_unknown_input_yields_empty_result() {
        let parsed = parse("what a lovely day");
        assert!(parsed.foods.is_empty());
        assert!(parsed.actions.is_empty());
        assert_eq!(parsed.intent, "Log food items");
    }
}
