//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod achievement;
pub mod exercise_entry;
pub mod feature_request;
pub mod food_item;
pub mod meal_entry;
pub mod nutrition_log;
pub mod streak_state;
pub mod water_entry;
pub mod weight_entry;

// Re-export specific types to avoid conflicts
pub use achievement::{Column as AchievementColumn, Entity as Achievement, Model as AchievementModel};
pub use exercise_entry::{
    Column as ExerciseEntryColumn, Entity as ExerciseEntry, Model as ExerciseEntryModel,
};
pub use feature_request::{
    Column as FeatureRequestColumn, Entity as FeatureRequest, Model as FeatureRequestModel,
};
pub use food_item::{Column as FoodItemColumn, Entity as FoodItem, Model as FoodItemModel};
pub use meal_entry::{Column as MealEntryColumn, Entity as MealEntry, Model as MealEntryModel};
pub use nutrition_log::{
    Column as NutritionLogColumn, Entity as NutritionLog, Model as NutritionLogModel,
};
pub use streak_state::{
    Column as StreakStateColumn, Entity as StreakState, Model as StreakStateModel,
};
pub use water_entry::{Column as WaterEntryColumn, Entity as WaterEntry, Model as WaterEntryModel};
pub use weight_entry::{
    Column as WeightEntryColumn, Entity as WeightEntry, Model as WeightEntryModel,
};
