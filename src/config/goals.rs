//! Daily goal configuration from config.toml.
//!
//! The calorie goal is a fixed, injected constant at this layer; there is no
//! profile-driven personalization. Streak qualification thresholds live here
//! too so the placeholder streak policy stays configurable.

use serde::Deserialize;

/// The `[goals]` section of config.toml.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GoalsConfig {
    /// Daily calorie goal
    pub daily_calories: f64,
    /// Daily water goal in milliliters
    pub daily_water_ml: f64,
    /// Fraction above the calorie goal a day may land and still qualify
    /// for the calorie streak (0.10 = within 10% over goal)
    pub calorie_tolerance: f64,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            daily_calories: 2000.0,
            daily_water_ml: 2000.0,
            calorie_tolerance: 0.10,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_goals_config() {
        let toml_str = r"
            daily_calories = 1800.0
            daily_water_ml = 2500.0
            calorie_tolerance = 0.05
        ";

        let goals: GoalsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(goals.daily_calories, 1800.0);
        assert_eq!(goals.daily_water_ml, 2500.0);
        assert_eq!(goals.calorie_tolerance, 0.05);
    }

    #[test]
    fn test_goals_defaults() {
        let goals: GoalsConfig = toml::from_str("").unwrap();
        assert_eq!(goals.daily_calories, 2000.0);
        assert_eq!(goals.daily_water_ml, 2000.0);
        assert_eq!(goals.calorie_tolerance, 0.10);
    }
}
