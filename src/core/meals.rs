//! Meal ledger business logic - Handles all meal logging operations.
//!
//! Meal entries are grouped into one nutrition log per local calendar day.
//! Every mutation (log, update, delete) triggers a full recompute of the
//! owning log's cached totals by summing all contained entries; totals are
//! never adjusted incrementally, which keeps them drift-free by construction.

use crate::{
    core::catalog,
    entities::{MealEntry, NutritionLog, food_item, meal_entry, nutrition_log},
    errors::{Error, Result},
};
use chrono::{DateTime, Local, NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal slot a logged entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Anything in between
    Snack,
}

impl MealType {
    /// Canonical lowercase name, as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parses a meal type from its lowercase name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" => Some(Self::Snack),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully materialized nutrition totals for one day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DailyNutrition {
    /// Total calories
    pub calories: f64,
    /// Total protein in grams
    pub protein_g: f64,
    /// Total carbohydrates in grams
    pub carbs_g: f64,
    /// Total fat in grams
    pub fat_g: f64,
    /// Total fiber in grams
    pub fiber_g: f64,
}

/// Partial update for an existing meal entry.
///
/// Only the provided fields change; the frozen nutrition snapshot is never
/// rescaled, even when the quantity changes (the snapshot is an audit record
/// of what was computed at logging time).
#[derive(Debug, Clone, Default)]
pub struct MealEntryUpdate {
    /// New consumed quantity in grams
    pub quantity_grams: Option<f64>,
    /// New meal slot
    pub meal_type: Option<MealType>,
    /// New timestamp; must stay within the entry's current day bucket
    pub timestamp: Option<DateTime<Utc>>,
    /// New note
    pub notes: Option<String>,
}

/// Truncates a timestamp to its local calendar day, the ledger grouping key.
#[must_use]
pub fn day_bucket(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// Finds the nutrition log for a day, creating an empty one if absent.
pub async fn get_or_create_log<C>(db: &C, date: NaiveDate) -> Result<nutrition_log::Model>
where
    C: ConnectionTrait,
{
    if let Some(log) = NutritionLog::find()
        .filter(nutrition_log::Column::Date.eq(date))
        .one(db)
        .await?
    {
        return Ok(log);
    }

    let log = nutrition_log::ActiveModel {
        date: Set(date),
        total_calories: Set(0.0),
        total_protein_g: Set(0.0),
        total_carbs_g: Set(0.0),
        total_fat_g: Set(0.0),
        total_fiber_g: Set(0.0),
        water_intake_ml: Set(0.0),
        ..Default::default()
    };

    let result = log.insert(db).await?;
    Ok(result)
}

/// Logs a meal against a catalog food and updates the day's cached totals.
///
/// The food's per-serving nutrition is scaled to `quantity_grams` once, here,
/// and embedded in the entry as a frozen snapshot. The owning log's totals
/// are then fully recomputed from all of the day's entries.
pub async fn log_meal(
    db: &DatabaseConnection,
    food: &food_item::Model,
    quantity_grams: f64,
    meal_type: MealType,
    timestamp: DateTime<Utc>,
    notes: Option<String>,
) -> Result<meal_entry::Model> {
    if !quantity_grams.is_finite() || quantity_grams <= 0.0 {
        return Err(Error::InvalidQuantity {
            quantity: quantity_grams,
        });
    }

    let snapshot = catalog::scale_nutrition(food, quantity_grams);

    // Use a transaction so the entry insert and the totals recompute land together
    let txn = db.begin().await?;

    let log = get_or_create_log(&txn, day_bucket(timestamp)).await?;

    let entry = meal_entry::ActiveModel {
        log_id: Set(log.id),
        food_id: Set(food.id),
        food_name: Set(food.name.clone()),
        quantity_grams: Set(quantity_grams),
        meal_type: Set(meal_type.as_str().to_string()),
        timestamp: Set(timestamp),
        calories: Set(snapshot.calories),
        protein_g: Set(snapshot.protein_g),
        carbs_g: Set(snapshot.carbs_g),
        fat_g: Set(snapshot.fat_g),
        fiber_g: Set(snapshot.fiber_g),
        notes: Set(notes),
        ..Default::default()
    };

    let result = entry.insert(&txn).await?;
    recompute_log_totals(&txn, log.id).await?;

    txn.commit().await?;
    Ok(result)
}

/// Applies a partial update to a meal entry and recomputes the day's totals.
///
/// A timestamp change that would move the entry into a different day bucket
/// is rejected with [`Error::CrossDayUpdate`]; delete and re-log instead.
pub async fn update_meal_entry(
    db: &DatabaseConnection,
    entry_id: i64,
    update: MealEntryUpdate,
) -> Result<meal_entry::Model> {
    if let Some(quantity) = update.quantity_grams {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(Error::InvalidQuantity { quantity });
        }
    }

    let txn = db.begin().await?;

    let entry = MealEntry::find_by_id(entry_id)
        .one(&txn)
        .await?
        .ok_or(Error::MealEntryNotFound { id: entry_id })?;

    if let Some(new_ts) = update.timestamp {
        let log = NutritionLog::find_by_id(entry.log_id)
            .one(&txn)
            .await?
            .ok_or(Error::MealEntryNotFound { id: entry_id })?;
        if day_bucket(new_ts) != log.date {
            return Err(Error::CrossDayUpdate { id: entry_id });
        }
    }

    let log_id = entry.log_id;
    let mut active: meal_entry::ActiveModel = entry.into();
    if let Some(quantity) = update.quantity_grams {
        active.quantity_grams = Set(quantity);
    }
    if let Some(meal_type) = update.meal_type {
        active.meal_type = Set(meal_type.as_str().to_string());
    }
    if let Some(timestamp) = update.timestamp {
        active.timestamp = Set(timestamp);
    }
    if let Some(notes) = update.notes {
        active.notes = Set(Some(notes));
    }

    let result = active.update(&txn).await?;
    recompute_log_totals(&txn, log_id).await?;

    txn.commit().await?;
    Ok(result)
}

/// Deletes a meal entry and recomputes the owning log's totals.
pub async fn delete_meal_entry(db: &DatabaseConnection, entry_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let entry = MealEntry::find_by_id(entry_id)
        .one(&txn)
        .await?
        .ok_or(Error::MealEntryNotFound { id: entry_id })?;

    let log_id = entry.log_id;
    entry.delete(&txn).await?;
    recompute_log_totals(&txn, log_id).await?;

    txn.commit().await?;
    Ok(())
}

/// Returns the day's meal entries in consumption order, or an empty vector
/// when no log exists for that day. Read-only.
pub async fn get_meals_for_date(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<Vec<meal_entry::Model>> {
    let Some(log) = NutritionLog::find()
        .filter(nutrition_log::Column::Date.eq(date))
        .one(db)
        .await?
    else {
        return Ok(Vec::new());
    };

    MealEntry::find()
        .filter(meal_entry::Column::LogId.eq(log.id))
        .order_by_asc(meal_entry::Column::Timestamp)
        .order_by_asc(meal_entry::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Sums the day's meal snapshots into a materialized [`DailyNutrition`].
pub async fn get_daily_nutrition(db: &DatabaseConnection, date: NaiveDate) -> Result<DailyNutrition> {
    let meals = get_meals_for_date(db, date).await?;
    Ok(sum_entries(&meals))
}

/// Fetches the nutrition log for a day, if one exists.
pub async fn get_log_for_date(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<Option<nutrition_log::Model>> {
    NutritionLog::find()
        .filter(nutrition_log::Column::Date.eq(date))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Fully recomputes a log's cached totals by summing all contained entries.
pub async fn recompute_log_totals<C>(db: &C, log_id: i64) -> Result<nutrition_log::Model>
where
    C: ConnectionTrait,
{
    let entries = MealEntry::find()
        .filter(meal_entry::Column::LogId.eq(log_id))
        .all(db)
        .await?;
    let totals = sum_entries(&entries);

    let log = NutritionLog::find_by_id(log_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::Config {
            message: format!("Nutrition log {log_id} disappeared during recompute"),
        })?;

    let mut active: nutrition_log::ActiveModel = log.into();
    active.total_calories = Set(totals.calories);
    active.total_protein_g = Set(totals.protein_g);
    active.total_carbs_g = Set(totals.carbs_g);
    active.total_fat_g = Set(totals.fat_g);
    active.total_fiber_g = Set(totals.fiber_g);

    let result = active.update(db).await?;
    Ok(result)
}

fn sum_entries(entries: &[meal_entry::Model]) -> DailyNutrition {
    entries.iter().fold(DailyNutrition::default(), |acc, m| {
        DailyNutrition {
            calories: acc.calories + m.calories,
            protein_g: acc.protein_g + m.protein_g,
            carbs_g: acc.carbs_g + m.carbs_g,
            fat_g: acc.fat_g + m.fat_g,
            fiber_g: acc.fiber_g + m.fiber_g,
        }
    })
}
