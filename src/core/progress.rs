//! Aggregation engine - calorie progress, streaks, achievements, and
//! eating-pattern analysis.
//!
//! The daily calorie goal is injected configuration, not profile state.
//! Streak and achievement thresholds are a documented placeholder policy
//! (the product never shipped final rules); both live in config or in the
//! rule table below so they can change without touching ledger code.

use crate::{
    config::goals::GoalsConfig,
    core::{meals, tracking},
    entities::{Achievement, StreakState, achievement, streak_state},
    errors::Result,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Calorie progress for one day against a fixed goal.
///
/// `remaining` and `percent_complete` are clamped independently: `consumed`
/// keeps the true (possibly over-goal) figure, `remaining` floors at zero,
/// and `percent_complete` caps at 100. A consumer that wants "how far over"
/// computes `consumed - goal` itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieProgress {
    /// Calories consumed that day (unclamped)
    pub consumed: f64,
    /// The configured daily goal
    pub goal: f64,
    /// `max(0, goal - consumed)`
    pub remaining: f64,
    /// `min(100, 100 * consumed / goal)`; 0 when the goal is 0
    pub percent_complete: f64,
}

/// The goal kinds streaks are tracked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    /// Daily calories within goal
    Calorie,
    /// Daily water goal reached
    Water,
    /// Weight logged that day
    Weight,
}

impl GoalKind {
    /// Canonical name as stored in `streak_states.goal_kind`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calorie => "calorie",
            Self::Water => "water",
            Self::Weight => "weight",
        }
    }
}

/// Average-calorie analysis over all logged days.
///
/// Meal-timing and frequent-food analysis are declared extension points and
/// intentionally stay empty.
#[derive(Debug, Clone, PartialEq)]
pub struct EatingPatterns {
    /// Mean of `total_calories` across all nutrition logs (0 with no logs)
    pub average_calories: f64,
    /// Extension point, always empty
    pub common_meal_times: Vec<String>,
    /// Extension point, always empty
    pub frequent_foods: Vec<String>,
}

/// Pure clamp arithmetic behind [`get_calorie_progress`].
#[must_use]
pub fn calorie_progress(consumed: f64, goal: f64) -> CalorieProgress {
    let percent_complete = if goal > 0.0 {
        (100.0 * consumed / goal).min(100.0)
    } else {
        0.0
    };

    CalorieProgress {
        consumed,
        goal,
        remaining: (goal - consumed).max(0.0),
        percent_complete,
    }
}

/// Computes calorie progress for a day against the configured goal.
pub async fn get_calorie_progress(
    db: &DatabaseConnection,
    date: NaiveDate,
    goal: f64,
) -> Result<CalorieProgress> {
    let nutrition = meals::get_daily_nutrition(db, date).await?;
    Ok(calorie_progress(nutrition.calories, goal))
}

/// Recomputes and persists all streak counters given the latest ledger state.
///
/// Invoked after every logging action (meal, weight, water, exercise).
/// Qualification policy (placeholder, configurable):
/// - calorie: `0 < consumed <= goal * (1 + calorie_tolerance)`
/// - water: day total >= daily water goal
/// - weight: at least one weight entry logged that day
pub async fn update_streaks(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
    goals: &GoalsConfig,
) -> Result<Vec<streak_state::Model>> {
    let today = meals::day_bucket(now);

    let consumed = meals::get_daily_nutrition(db, today).await?.calories;
    let calorie_ceiling = goals.daily_calories * (1.0 + goals.calorie_tolerance);
    let calorie_ok = consumed > 0.0 && consumed <= calorie_ceiling;

    let water_ok = tracking::get_water_for_day(db, now).await? >= goals.daily_water_ml;
    let weight_ok = tracking::weight_entries_on_day(db, today).await? > 0;

    let mut states = Vec::with_capacity(3);
    for (kind, qualified) in [
        (GoalKind::Calorie, calorie_ok),
        (GoalKind::Water, water_ok),
        (GoalKind::Weight, weight_ok),
    ] {
        states.push(record_qualification(db, kind, today, qualified).await?);
    }
    Ok(states)
}

/// Applies one day's qualification result to a streak row.
///
/// Qualifying the day after the last qualified day extends the streak, a gap
/// restarts it at 1, and re-qualifying the same day is a no-op. A day that
/// does not qualify leaves the row untouched; the chain breaks naturally when
/// the next qualification arrives after a gap.
pub async fn record_qualification(
    db: &DatabaseConnection,
    kind: GoalKind,
    day: NaiveDate,
    qualified: bool,
) -> Result<streak_state::Model> {
    let existing = StreakState::find()
        .filter(streak_state::Column::GoalKind.eq(kind.as_str()))
        .one(db)
        .await?;

    let Some(state) = existing else {
        let current = i64::from(qualified);
        let row = streak_state::ActiveModel {
            goal_kind: Set(kind.as_str().to_string()),
            current: Set(current),
            best: Set(current),
            last_qualified: Set(qualified.then_some(day)),
            ..Default::default()
        };
        let result = row.insert(db).await?;
        return Ok(result);
    };

    if !qualified || state.last_qualified == Some(day) {
        return Ok(state);
    }

    let current = if state.last_qualified == Some(day - Duration::days(1)) {
        state.current + 1
    } else {
        1
    };
    let best = state.best.max(current);

    let mut active: streak_state::ActiveModel = state.into();
    active.current = Set(current);
    active.best = Set(best);
    active.last_qualified = Set(Some(day));

    let result = active.update(db).await?;
    Ok(result)
}

/// Returns all streak rows, ordered by goal kind.
pub async fn get_streaks(db: &DatabaseConnection) -> Result<Vec<streak_state::Model>> {
    StreakState::find()
        .order_by_asc(streak_state::Column::GoalKind)
        .all(db)
        .await
        .map_err(Into::into)
}

struct AchievementRule {
    code: &'static str,
    title: &'static str,
    description: &'static str,
    kind: GoalKind,
    threshold: i64,
}

/// Placeholder rule table: thresholds over streak bests. See DESIGN.md.
const ACHIEVEMENT_RULES: [AchievementRule; 6] = [
    AchievementRule {
        code: "calorie_first_day",
        title: "First Day on Target",
        description: "Finished a day within your calorie goal",
        kind: GoalKind::Calorie,
        threshold: 1,
    },
    AchievementRule {
        code: "calorie_streak_3",
        title: "Three in a Row",
        description: "Three consecutive days within your calorie goal",
        kind: GoalKind::Calorie,
        threshold: 3,
    },
    AchievementRule {
        code: "calorie_streak_7",
        title: "One Week Strong",
        description: "Seven consecutive days within your calorie goal",
        kind: GoalKind::Calorie,
        threshold: 7,
    },
    AchievementRule {
        code: "calorie_streak_30",
        title: "Thirty-Day Habit",
        description: "Thirty consecutive days within your calorie goal",
        kind: GoalKind::Calorie,
        threshold: 30,
    },
    AchievementRule {
        code: "water_streak_7",
        title: "Hydration Week",
        description: "Seven consecutive days hitting your water goal",
        kind: GoalKind::Water,
        threshold: 7,
    },
    AchievementRule {
        code: "weight_streak_3",
        title: "Weigh-In Routine",
        description: "Three consecutive days of weight logging",
        kind: GoalKind::Weight,
        threshold: 3,
    },
];

/// Unlocks any achievements whose streak threshold has been reached.
///
/// Idempotent: an achievement unlocks at most once, keyed by `code`.
/// Returns the achievements newly unlocked by this check.
pub async fn check_achievements(db: &DatabaseConnection) -> Result<Vec<achievement::Model>> {
    let streaks = get_streaks(db).await?;
    let best_for = |kind: GoalKind| {
        streaks
            .iter()
            .find(|s| s.goal_kind == kind.as_str())
            .map_or(0, |s| s.best)
    };

    let mut unlocked = Vec::new();
    for rule in &ACHIEVEMENT_RULES {
        if best_for(rule.kind) < rule.threshold {
            continue;
        }

        let already = Achievement::find()
            .filter(achievement::Column::Code.eq(rule.code))
            .one(db)
            .await?;
        if already.is_some() {
            continue;
        }

        let row = achievement::ActiveModel {
            code: Set(rule.code.to_string()),
            title: Set(rule.title.to_string()),
            description: Set(rule.description.to_string()),
            unlocked_at: Set(Utc::now()),
            ..Default::default()
        };
        unlocked.push(row.insert(db).await?);
    }
    Ok(unlocked)
}

/// Returns all unlocked achievements, oldest first.
pub async fn get_unlocked_achievements(db: &DatabaseConnection) -> Result<Vec<achievement::Model>> {
    Achievement::find()
        .order_by_asc(achievement::Column::UnlockedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Averages logged calories across all nutrition logs.
pub async fn analyze_eating_patterns(db: &DatabaseConnection) -> Result<EatingPatterns> {
    let logs = crate::entities::NutritionLog::find().all(db).await?;

    let average_calories = if logs.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let count = logs.len() as f64;
        logs.iter().map(|l| l.total_calories).sum::<f64>() / count
    };

    Ok(EatingPatterns {
        average_calories,
        common_meal_times: Vec::new(),
        frequent_foods: Vec::new(),
    })
}

/// Generates a progress bar string like `[████████░░] 80.0%`.
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // Cast safety: clamped_progress ∈ [0, 100], length is small (10-20).
    // Result is mathematically in [0, length], truncation/sign loss intentional for display.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {progress_percent:.1}%")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::meals::{MealType, day_bucket, log_meal};
    use crate::core::tracking::{log_water, log_weight};
    use crate::test_utils::{setup_test_db, setup_with_food};

    #[test]
    fn test_calorie_progress_under_goal() {
        let p = calorie_progress(1500.0, 2000.0);
        assert_eq!(p.consumed, 1500.0);
        assert_eq!(p.remaining, 500.0);
        assert_eq!(p.percent_complete, 75.0);
    }

    #[test]
    fn test_calorie_progress_over_goal_clamps_independently() {
        let p = calorie_progress(2500.0, 2000.0);
        // Overage stays visible in consumed
        assert_eq!(p.consumed, 2500.0);
        // remaining floors at zero
        assert_eq!(p.remaining, 0.0);
        // percent caps at 100
        assert_eq!(p.percent_complete, 100.0);
    }

    #[test]
    fn test_calorie_progress_zero_goal() {
        let p = calorie_progress(500.0, 0.0);
        assert_eq!(p.percent_complete, 0.0);
        assert_eq!(p.remaining, 0.0);
        assert_eq!(p.consumed, 500.0);
    }

    #[test]
    fn test_calorie_progress_nothing_logged() {
        let p = calorie_progress(0.0, 2000.0);
        assert_eq!(p.remaining, 2000.0);
        assert_eq!(p.percent_complete, 0.0);
    }

    #[tokio::test]
    async fn test_get_calorie_progress_from_ledger() -> Result<()> {
        let (db, apple) = setup_with_food().await?;
        let now = Utc::now();

        // 364g apple = 190 kcal
        log_meal(&db, &apple, 364.0, MealType::Lunch, now, None).await?;

        let p = get_calorie_progress(&db, day_bucket(now), 2000.0).await?;
        assert_eq!(p.consumed, 190.0);
        assert_eq!(p.remaining, 1810.0);
        assert_eq!(p.percent_complete, 9.5);

        Ok(())
    }

    #[tokio::test]
    async fn test_streak_increment_and_reset() -> Result<()> {
        let db = setup_test_db().await?;
        let day1 = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();

        let s = record_qualification(&db, GoalKind::Calorie, day1, true).await?;
        assert_eq!((s.current, s.best), (1, 1));

        // Next day extends
        let s = record_qualification(&db, GoalKind::Calorie, day1 + Duration::days(1), true)
            .await?;
        assert_eq!((s.current, s.best), (2, 2));

        // Same-day recheck is a no-op
        let s = record_qualification(&db, GoalKind::Calorie, day1 + Duration::days(1), true)
            .await?;
        assert_eq!((s.current, s.best), (2, 2));

        // A gap restarts at 1, best is retained
        let s = record_qualification(&db, GoalKind::Calorie, day1 + Duration::days(5), true)
            .await?;
        assert_eq!((s.current, s.best), (1, 2));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_qualifying_day_leaves_row_untouched() -> Result<()> {
        let db = setup_test_db().await?;
        let day = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();

        record_qualification(&db, GoalKind::Water, day, true).await?;
        let s = record_qualification(&db, GoalKind::Water, day + Duration::days(1), false)
            .await?;
        assert_eq!(s.current, 1);
        assert_eq!(s.last_qualified, Some(day));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_streaks_qualification_policy() -> Result<()> {
        let (db, apple) = setup_with_food().await?;
        let goals = GoalsConfig::default();
        let now = Utc::now();

        // Nothing logged yet: no streak qualifies
        let states = update_streaks(&db, now, &goals).await?;
        assert!(states.iter().all(|s| s.current == 0));

        // Within calorie goal, water goal reached, weight logged
        log_meal(&db, &apple, 364.0, MealType::Lunch, now, None).await?;
        log_water(&db, 2000.0, now).await?;
        log_weight(&db, 70.0, now, None, None, None).await?;

        let states = update_streaks(&db, now, &goals).await?;
        assert!(states.iter().all(|s| s.current == 1));

        Ok(())
    }

    #[tokio::test]
    async fn test_calorie_overage_does_not_qualify() -> Result<()> {
        let (db, apple) = setup_with_food().await?;
        let goals = GoalsConfig {
            daily_calories: 100.0,
            calorie_tolerance: 0.10,
            ..Default::default()
        };
        let now = Utc::now();

        // 190 kcal against a 100 kcal goal (+10% tolerance = 110 ceiling)
        log_meal(&db, &apple, 364.0, MealType::Dinner, now, None).await?;

        let states = update_streaks(&db, now, &goals).await?;
        let calorie = states
            .iter()
            .find(|s| s.goal_kind == "calorie")
            .unwrap();
        assert_eq!(calorie.current, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_achievements_unlock_once() -> Result<()> {
        let db = setup_test_db().await?;
        let day = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();

        // Build a 3-day calorie streak
        for offset in 0..3 {
            record_qualification(&db, GoalKind::Calorie, day + Duration::days(offset), true)
                .await?;
        }

        let unlocked = check_achievements(&db).await?;
        let codes: Vec<&str> = unlocked.iter().map(|a| a.code.as_str()).collect();
        assert!(codes.contains(&"calorie_first_day"));
        assert!(codes.contains(&"calorie_streak_3"));
        assert!(!codes.contains(&"calorie_streak_7"));

        // Second check unlocks nothing new
        let again = check_achievements(&db).await?;
        assert!(again.is_empty());

        let all = get_unlocked_achievements(&db).await?;
        assert_eq!(all.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_analyze_eating_patterns() -> Result<()> {
        let (db, apple) = setup_with_food().await?;
        let now = Utc::now();

        // Empty store averages to zero
        let patterns = analyze_eating_patterns(&db).await?;
        assert_eq!(patterns.average_calories, 0.0);

        // Two days: 190 and 95 kcal -> mean 142.5
        log_meal(&db, &apple, 364.0, MealType::Lunch, now, None).await?;
        log_meal(
            &db,
            &apple,
            182.0,
            MealType::Lunch,
            now - Duration::days(1),
            None,
        )
        .await?;

        let patterns = analyze_eating_patterns(&db).await?;
        assert_eq!(patterns.average_calories, 142.5);
        assert!(patterns.common_meal_times.is_empty());
        assert!(patterns.frequent_foods.is_empty());

        Ok(())
    }

    #[test]
    fn test_format_progress_bar() {
        assert_eq!(format_progress_bar(100.0, Some(10)), "[██████████] 100.0%");
        assert_eq!(format_progress_bar(50.0, Some(10)), "[█████░░░░░] 50.0%");
        assert_eq!(format_progress_bar(0.0, Some(10)), "[░░░░░░░░░░] 0.0%");
    }
}
