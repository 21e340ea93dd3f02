//! Autocomplete handlers for Discord slash command parameters.
//!
//! This module provides autocomplete functionality for command parameters like
//! food names and meal types, improving the user experience by suggesting
//! valid options as the user types.

use crate::{
    bot::BotData,
    core::{catalog, features::FEATURE_CATEGORIES},
    errors::Error,
};

/// The meal slots offered by meal-type autocomplete.
const MEAL_TYPES: [&str; 4] = ["breakfast", "lunch", "dinner", "snack"];

/// Case-insensitive substring filter over a fixed option set.
fn filter_static_options(options: &[&str], partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    options
        .iter()
        .filter(|opt| opt.contains(&partial_lower))
        .map(|&opt| opt.to_string())
        .collect()
}

/// Provides autocomplete suggestions for food names.
///
/// Queries the catalog for foods whose name matches the user's partial input
/// and returns up to 25 matching names.
pub async fn autocomplete_food_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;

    let Ok(foods) = catalog::get_all_foods(db).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();

    // get_all_foods is already alphabetical; filter and cap at the Discord limit
    foods
        .into_iter()
        .filter(|food| food.name.to_lowercase().contains(&partial_lower))
        .map(|food| food.name)
        .take(25)
        .collect()
}

/// Provides autocomplete suggestions for meal types.
pub async fn autocomplete_meal_type(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    filter_static_options(&MEAL_TYPES, partial)
}

/// Provides autocomplete suggestions for feature request categories.
pub async fn autocomplete_feature_category(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    filter_static_options(&FEATURE_CATEGORIES, partial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_filtering() {
        assert_eq!(filter_static_options(&MEAL_TYPES, "lun"), vec!["lunch"]);
        assert_eq!(filter_static_options(&MEAL_TYPES, "LUN"), vec!["lunch"]);
        assert_eq!(filter_static_options(&MEAL_TYPES, "").len(), 4);
        assert!(filter_static_options(&MEAL_TYPES, "brunch").is_empty());
    }

    #[test]
    fn test_feature_category_filtering() {
        assert_eq!(
            filter_static_options(&FEATURE_CATEGORIES, "track"),
            vec!["tracking"]
        );
        assert_eq!(
            filter_static_options(&FEATURE_CATEGORIES, "").len(),
            FEATURE_CATEGORIES.len()
        );
    }
}
