//! JSON export/import of the core ledgers.
//!
//! The payload covers the five core ledgers: nutrition logs (with their meal
//! entries), weight, water, exercise, and custom catalog foods. Every ledger
//! field defaults to empty on import, so partial payloads are valid. Import
//! parses the whole document before touching the database and applies it in
//! one transaction: a malformed payload leaves the store untouched.

use crate::{
    core::meals,
    entities::{
        ExerciseEntry, FoodItem, MealEntry, NutritionLog, WaterEntry, WeightEntry,
        exercise_entry, food_item, meal_entry, nutrition_log, water_entry, weight_entry,
    },
    errors::Result,
};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};

/// The full exportable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportPayload {
    /// Per-day logs with their meal entries
    #[serde(default)]
    pub nutrition_logs: Vec<LogExport>,
    /// Weight ledger
    #[serde(default)]
    pub weight_entries: Vec<WeightExport>,
    /// Water ledger
    #[serde(default)]
    pub water_entries: Vec<WaterExport>,
    /// Exercise ledger
    #[serde(default)]
    pub exercise_entries: Vec<ExerciseExport>,
    /// User-defined catalog foods (built-in foods are not exported)
    #[serde(default)]
    pub custom_foods: Vec<FoodExport>,
}

/// One day's log and its meals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogExport {
    /// The local calendar day
    pub date: NaiveDate,
    /// Cached water total for the day
    #[serde(default)]
    pub water_intake_ml: f64,
    /// The day's meal entries
    #[serde(default)]
    pub meals: Vec<MealExport>,
}

/// A meal entry with its frozen nutrition snapshot.
///
/// `food_id` is carried verbatim; it may not resolve in the importing
/// catalog, which is fine because the snapshot is self-contained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealExport {
    pub food_id: i64,
    pub food_name: String,
    pub quantity_grams: f64,
    pub meal_type: String,
    pub timestamp: DateTime<Utc>,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightExport {
    pub weight_kg: f64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
    #[serde(default)]
    pub muscle_mass_kg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterExport {
    pub amount_ml: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseExport {
    pub name: String,
    pub exercise_type: String,
    pub duration_min: f64,
    pub calories_burned: f64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodExport {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    #[serde(default)]
    pub sugar_g: Option<f64>,
    #[serde(default)]
    pub sodium_mg: Option<f64>,
    #[serde(default)]
    pub cholesterol_mg: Option<f64>,
    pub serving_size: String,
    pub serving_size_grams: f64,
}

/// Counts of what an import appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub logs: usize,
    pub meals: usize,
    pub weight_entries: usize,
    pub water_entries: usize,
    pub exercise_entries: usize,
    pub custom_foods: usize,
}

/// Serializes the whole store as pretty-printed JSON.
pub async fn export_data(db: &DatabaseConnection) -> Result<String> {
    let logs = NutritionLog::find()
        .order_by_asc(nutrition_log::Column::Date)
        .all(db)
        .await?;

    let mut nutrition_logs = Vec::with_capacity(logs.len());
    for log in logs {
        let entries = MealEntry::find()
            .filter(meal_entry::Column::LogId.eq(log.id))
            .order_by_asc(meal_entry::Column::Timestamp)
            .order_by_asc(meal_entry::Column::Id)
            .all(db)
            .await?;

        nutrition_logs.push(LogExport {
            date: log.date,
            water_intake_ml: log.water_intake_ml,
            meals: entries
                .into_iter()
                .map(|m| MealExport {
                    food_id: m.food_id,
                    food_name: m.food_name,
                    quantity_grams: m.quantity_grams,
                    meal_type: m.meal_type,
                    timestamp: m.timestamp,
                    calories: m.calories,
                    protein_g: m.protein_g,
                    carbs_g: m.carbs_g,
                    fat_g: m.fat_g,
                    fiber_g: m.fiber_g,
                    notes: m.notes,
                })
                .collect(),
        });
    }

    let weight_entries = WeightEntry::find()
        .order_by_asc(weight_entry::Column::Date)
        .order_by_asc(weight_entry::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(|w| WeightExport {
            weight_kg: w.weight_kg,
            date: w.date,
            notes: w.notes,
            body_fat_percentage: w.body_fat_percentage,
            muscle_mass_kg: w.muscle_mass_kg,
        })
        .collect();

    let water_entries = WaterEntry::find()
        .order_by_asc(water_entry::Column::Timestamp)
        .order_by_asc(water_entry::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(|w| WaterExport {
            amount_ml: w.amount_ml,
            timestamp: w.timestamp,
        })
        .collect();

    let exercise_entries = ExerciseEntry::find()
        .order_by_asc(exercise_entry::Column::Date)
        .order_by_asc(exercise_entry::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(|e| ExerciseExport {
            name: e.name,
            exercise_type: e.exercise_type,
            duration_min: e.duration_min,
            calories_burned: e.calories_burned,
            date: e.date,
            notes: e.notes,
        })
        .collect();

    let custom_foods = FoodItem::find()
        .filter(food_item::Column::IsCustom.eq(true))
        .order_by_asc(food_item::Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(|f| FoodExport {
            name: f.name,
            brand: f.brand,
            category: f.category,
            calories: f.calories,
            protein_g: f.protein_g,
            carbs_g: f.carbs_g,
            fat_g: f.fat_g,
            fiber_g: f.fiber_g,
            sugar_g: f.sugar_g,
            sodium_mg: f.sodium_mg,
            cholesterol_mg: f.cholesterol_mg,
            serving_size: f.serving_size,
            serving_size_grams: f.serving_size_grams,
        })
        .collect();

    let payload = ExportPayload {
        nutrition_logs,
        weight_entries,
        water_entries,
        exercise_entries,
        custom_foods,
    };

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Imports a payload produced by [`export_data`], merging into existing data.
///
/// Merge is shallow per day: an incoming log's meals are appended to that
/// day's existing log (created if absent), its water total overwrites the
/// cached field, and the day's totals are recomputed afterwards. Weight,
/// water, and exercise entries are appended. Custom foods are skipped when a
/// food of the same name already exists.
pub async fn import_data(db: &DatabaseConnection, json: &str) -> Result<ImportSummary> {
    let payload: ExportPayload = serde_json::from_str(json)?;

    let mut summary = ImportSummary::default();
    let txn = db.begin().await?;

    for log_export in payload.nutrition_logs {
        let log = meals::get_or_create_log(&txn, log_export.date).await?;
        summary.logs += 1;

        for m in log_export.meals {
            let entry = meal_entry::ActiveModel {
                log_id: Set(log.id),
                food_id: Set(m.food_id),
                food_name: Set(m.food_name),
                quantity_grams: Set(m.quantity_grams),
                meal_type: Set(m.meal_type),
                timestamp: Set(m.timestamp),
                calories: Set(m.calories),
                protein_g: Set(m.protein_g),
                carbs_g: Set(m.carbs_g),
                fat_g: Set(m.fat_g),
                fiber_g: Set(m.fiber_g),
                notes: Set(m.notes),
                ..Default::default()
            };
            entry.insert(&txn).await?;
            summary.meals += 1;
        }

        let mut active: nutrition_log::ActiveModel = log.clone().into();
        active.water_intake_ml = Set(log_export.water_intake_ml);
        active.update(&txn).await?;

        meals::recompute_log_totals(&txn, log.id).await?;
    }

    for w in payload.weight_entries {
        let entry = weight_entry::ActiveModel {
            weight_kg: Set(w.weight_kg),
            date: Set(w.date),
            notes: Set(w.notes),
            body_fat_percentage: Set(w.body_fat_percentage),
            muscle_mass_kg: Set(w.muscle_mass_kg),
            ..Default::default()
        };
        entry.insert(&txn).await?;
        summary.weight_entries += 1;
    }

    for w in payload.water_entries {
        let entry = water_entry::ActiveModel {
            amount_ml: Set(w.amount_ml),
            timestamp: Set(w.timestamp),
            ..Default::default()
        };
        entry.insert(&txn).await?;
        summary.water_entries += 1;
    }

    for e in payload.exercise_entries {
        let entry = exercise_entry::ActiveModel {
            name: Set(e.name),
            exercise_type: Set(e.exercise_type),
            duration_min: Set(e.duration_min),
            calories_burned: Set(e.calories_burned),
            date: Set(e.date),
            notes: Set(e.notes),
            ..Default::default()
        };
        entry.insert(&txn).await?;
        summary.exercise_entries += 1;
    }

    for f in payload.custom_foods {
        let exists = FoodItem::find()
            .filter(food_item::Column::Name.eq(f.name.clone()))
            .one(&txn)
            .await?
            .is_some();
        if exists {
            continue;
        }

        let food = food_item::ActiveModel {
            name: Set(f.name),
            brand: Set(f.brand),
            category: Set(f.category),
            calories: Set(f.calories),
            protein_g: Set(f.protein_g),
            carbs_g: Set(f.carbs_g),
            fat_g: Set(f.fat_g),
            fiber_g: Set(f.fiber_g),
            sugar_g: Set(f.sugar_g),
            sodium_mg: Set(f.sodium_mg),
            cholesterol_mg: Set(f.cholesterol_mg),
            serving_size: Set(f.serving_size),
            serving_size_grams: Set(f.serving_size_grams),
            is_custom: Set(true),
            verified: Set(false),
            ..Default::default()
        };
        food.insert(&txn).await?;
        summary.custom_foods += 1;
    }

    txn.commit().await?;
    Ok(summary)
}
