//! Tracking ledgers business logic - weight, water, and exercise.
//!
//! These ledgers are independent of the meal ledger: weight reads return full
//! history (capped for charting), water totals are recomputed from the raw
//! entries on every call so nothing goes stale mid-session, and exercise is a
//! plain append-only record.

use crate::{
    core::meals::day_bucket,
    entities::{WaterEntry, WeightEntry, exercise_entry, water_entry, weight_entry},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// How many recent weight entries the progress view returns.
const WEIGHT_PROGRESS_LIMIT: u64 = 30;

/// Logs a weight measurement.
///
/// Requires a finite, positive weight; everything else is optional.
pub async fn log_weight(
    db: &DatabaseConnection,
    weight_kg: f64,
    date: DateTime<Utc>,
    notes: Option<String>,
    body_fat_percentage: Option<f64>,
    muscle_mass_kg: Option<f64>,
) -> Result<weight_entry::Model> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(Error::InvalidQuantity {
            quantity: weight_kg,
        });
    }

    let entry = weight_entry::ActiveModel {
        weight_kg: Set(weight_kg),
        date: Set(date),
        notes: Set(notes),
        body_fat_percentage: Set(body_fat_percentage),
        muscle_mass_kg: Set(muscle_mass_kg),
        ..Default::default()
    };

    let result = entry.insert(db).await?;
    Ok(result)
}

/// Returns the most recent weight entries (up to 30) for progress display,
/// ordered descending by date. Same-date entries keep insertion order.
pub async fn get_weight_progress(db: &DatabaseConnection) -> Result<Vec<weight_entry::Model>> {
    WeightEntry::find()
        .order_by_desc(weight_entry::Column::Date)
        .order_by_asc(weight_entry::Column::Id)
        .limit(WEIGHT_PROGRESS_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Logs a water intake event. No upper bound is enforced.
pub async fn log_water(
    db: &DatabaseConnection,
    amount_ml: f64,
    timestamp: DateTime<Utc>,
) -> Result<water_entry::Model> {
    if !amount_ml.is_finite() || amount_ml <= 0.0 {
        return Err(Error::InvalidQuantity {
            quantity: amount_ml,
        });
    }

    let entry = water_entry::ActiveModel {
        amount_ml: Set(amount_ml),
        timestamp: Set(timestamp),
        ..Default::default()
    };

    let result = entry.insert(db).await?;
    Ok(result)
}

/// Sums water intake for the calendar day containing `now`.
///
/// Always recomputed from the raw ledger; nothing is cached, so entries
/// logged mid-session are reflected immediately.
pub async fn get_water_for_day(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<f64> {
    let day = day_bucket(now);
    let entries = WaterEntry::find().all(db).await?;

    Ok(entries
        .iter()
        .filter(|e| day_bucket(e.timestamp) == day)
        .map(|e| e.amount_ml)
        .sum())
}

/// Sums today's water intake. See [`get_water_for_day`].
pub async fn get_today_water(db: &DatabaseConnection) -> Result<f64> {
    get_water_for_day(db, Utc::now()).await
}

/// Logs an exercise session.
pub async fn log_exercise(
    db: &DatabaseConnection,
    name: String,
    exercise_type: String,
    duration_min: f64,
    calories_burned: f64,
    date: DateTime<Utc>,
    notes: Option<String>,
) -> Result<exercise_entry::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Exercise name cannot be empty".to_string(),
        });
    }
    if !duration_min.is_finite() || duration_min <= 0.0 {
        return Err(Error::InvalidQuantity {
            quantity: duration_min,
        });
    }

    let entry = exercise_entry::ActiveModel {
        name: Set(name.trim().to_string()),
        exercise_type: Set(exercise_type),
        duration_min: Set(duration_min),
        calories_burned: Set(calories_burned),
        date: Set(date),
        notes: Set(notes),
        ..Default::default()
    };

    let result = entry.insert(db).await?;
    Ok(result)
}

/// Counts weight entries logged on the given day. Used by the streak engine.
pub async fn weight_entries_on_day(
    db: &DatabaseConnection,
    day: chrono::NaiveDate,
) -> Result<usize> {
    let entries = WeightEntry::find().all(db).await?;
    Ok(entries.iter().filter(|e| day_bucket(e.date) == day).count())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_log_weight_validation() -> Result<()> {
        let db = setup_test_db().await?;

        for bad in [0.0, -70.0, f64::NAN] {
            let result = log_weight(&db, bad, Utc::now(), None, None, None).await;
            assert!(matches!(
                result.unwrap_err(),
                Error::InvalidQuantity { quantity: _ }
            ));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_weight_progress_ordering_stable_for_ties() -> Result<()> {
        let db = setup_test_db().await?;
        let now = Utc::now();

        // Two same-date entries plus one older entry
        let first = log_weight(&db, 80.0, now, None, None, None).await?;
        let second = log_weight(&db, 79.5, now, None, None, None).await?;
        let older = log_weight(&db, 81.0, now - chrono::Duration::days(3), None, None, None)
            .await?;

        let progress = get_weight_progress(&db).await?;
        assert_eq!(progress.len(), 3);
        // Descending by date; ties keep insertion order
        assert_eq!(progress[0].id, first.id);
        assert_eq!(progress[1].id, second.id);
        assert_eq!(progress[2].id, older.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_weight_progress_caps_at_thirty() -> Result<()> {
        let db = setup_test_db().await?;
        let now = Utc::now();

        for i in 0..35 {
            log_weight(
                &db,
                70.0 + f64::from(i) * 0.1,
                now - chrono::Duration::days(i64::from(i)),
                None,
                None,
                None,
            )
            .await?;
        }

        let progress = get_weight_progress(&db).await?;
        assert_eq!(progress.len(), 30);
        // Most recent first
        assert_eq!(progress[0].weight_kg, 70.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_today_water_sums_only_today() -> Result<()> {
        let db = setup_test_db().await?;
        let now = Utc::now();

        log_water(&db, 250.0, now).await?;
        log_water(&db, 500.0, now).await?;
        assert_eq!(get_water_for_day(&db, now).await?, 750.0);

        // Yesterday's entry must not change today's total
        log_water(&db, 100.0, now - chrono::Duration::days(1)).await?;
        assert_eq!(get_water_for_day(&db, now).await?, 750.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_water_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = log_water(&db, -250.0, Utc::now()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidQuantity { quantity: -250.0 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_log_exercise() -> Result<()> {
        let db = setup_test_db().await?;

        let entry = log_exercise(
            &db,
            "Running".to_string(),
            "cardio".to_string(),
            30.0,
            320.0,
            Utc::now(),
            None,
        )
        .await?;
        assert_eq!(entry.name, "Running");
        assert_eq!(entry.calories_burned, 320.0);

        let result = log_exercise(
            &db,
            "  ".to_string(),
            "cardio".to_string(),
            30.0,
            100.0,
            Utc::now(),
            None,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_weight_entries_on_day() -> Result<()> {
        let db = setup_test_db().await?;
        let now = Utc::now();

        log_weight(&db, 70.0, now, None, None, None).await?;
        log_weight(&db, 71.0, now - chrono::Duration::days(2), None, None, None).await?;

        assert_eq!(weight_entries_on_day(&db, day_bucket(now)).await?, 1);
        assert_eq!(
            weight_entries_on_day(&db, day_bucket(now - chrono::Duration::days(1))).await?,
            0
        );

        Ok(())
    }
}
