//! Daily total aggregation
//!
//! Computes and caches the sum of all nutrients consumed on a calendar day.
//! Recomputation always folds the full food list from scratch rather than
//! mutating a running total, so repeated runs over the same list are
//! byte-identical and the concurrent last-write-wins race cannot drift.

use chrono::NaiveDate;
use thiserror::Error;

use crate::db::{Database, DbError};
use crate::models::{DailyTotal, NutrientProfile};

/// Errors surfaced by the daily aggregator
///
/// Numeric edge cases never land here; malformed profile values are
/// normalized before arithmetic. Only missing identifiers and collaborator
/// failures are caller-visible.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("database error: {0}")]
    Db(#[from] DbError),

    #[error("user id must not be empty")]
    MissingUserId,

    #[error("invalid date '{0}': expected an ISO calendar date (YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("failed to load foods for date: {0}")]
    LoadFoods(String),
}

/// Return the cached total for `(user_id, date)`, computing and persisting
/// it first if absent
///
/// On a cache hit the loader is not invoked. Two concurrent cache misses
/// both compute and store; the later write wins, which is accepted
/// behavior, not something to serialize away.
pub fn get_or_compute<F>(
    db: &Database,
    user_id: &str,
    date: &str,
    load_foods: F,
) -> Result<DailyTotal, AggregateError>
where
    F: FnOnce() -> Result<Vec<NutrientProfile>, String>,
{
    validate_key(user_id, date)?;

    let conn = db.get_conn()?;
    if let Some(total) = DailyTotal::get(&conn, user_id, date)? {
        tracing::debug!(user_id, date, "daily total cache hit");
        return Ok(total);
    }
    drop(conn);

    compute_and_store(db, user_id, date, load_foods)
}

/// Recompute and overwrite the total for `(user_id, date)` unconditionally
///
/// Used after a food for that date was added, edited, or deleted.
pub fn recompute<F>(
    db: &Database,
    user_id: &str,
    date: &str,
    load_foods: F,
) -> Result<DailyTotal, AggregateError>
where
    F: FnOnce() -> Result<Vec<NutrientProfile>, String>,
{
    validate_key(user_id, date)?;
    compute_and_store(db, user_id, date, load_foods)
}

fn compute_and_store<F>(
    db: &Database,
    user_id: &str,
    date: &str,
    load_foods: F,
) -> Result<DailyTotal, AggregateError>
where
    F: FnOnce() -> Result<Vec<NutrientProfile>, String>,
{
    let foods = load_foods().map_err(AggregateError::LoadFoods)?;

    // Each food's calories were derived at creation time; summing the
    // stored field avoids double-rounding drift from re-deriving them
    // off the summed macros.
    let total: NutrientProfile = foods.iter().map(|f| f.sanitized()).sum();

    tracing::debug!(
        user_id,
        date,
        foods = foods.len(),
        calories = total.calories,
        "computed daily total"
    );

    let conn = db.get_conn()?;
    Ok(DailyTotal::upsert(&conn, user_id, date, &total)?)
}

/// Missing identifiers are precondition violations, unlike numeric edge
/// cases which are normalized
fn validate_key(user_id: &str, date: &str) -> Result<(), AggregateError> {
    if user_id.trim().is_empty() {
        return Err(AggregateError::MissingUserId);
    }
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(AggregateError::InvalidDate(date.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::db::migrations::run_migrations;

    fn test_db() -> Database {
        let db = Database::in_memory().unwrap();
        db.with_conn(|conn| run_migrations(conn)).unwrap();
        db
    }

    fn foods() -> Vec<NutrientProfile> {
        vec![
            NutrientProfile {
                calories: 370.0,
                protein: 30.0,
                carbs: 40.0,
                fat: 10.0,
                fiber: 5.0,
            },
            NutrientProfile {
                calories: 610.0,
                protein: 25.0,
                carbs: 80.0,
                fat: 20.0,
                fiber: 8.0,
            },
        ]
    }

    #[test]
    fn test_computes_and_persists_on_miss() {
        let db = test_db();

        let total = get_or_compute(&db, "user-1", "2025-01-09", || Ok(foods())).unwrap();
        assert_eq!(total.nutrition.calories, 980.0);
        assert_eq!(total.nutrition.protein, 55.0);
        assert_eq!(total.nutrition.carbs, 120.0);
        assert_eq!(total.nutrition.fat, 30.0);
        assert_eq!(total.nutrition.fiber, 13.0);

        let conn = db.get_conn().unwrap();
        assert!(DailyTotal::get(&conn, "user-1", "2025-01-09").unwrap().is_some());
    }

    #[test]
    fn test_cache_hit_skips_loader() {
        let db = test_db();
        let calls = Cell::new(0);

        let first = get_or_compute(&db, "user-1", "2025-01-09", || {
            calls.set(calls.get() + 1);
            Ok(foods())
        })
        .unwrap();

        let second = get_or_compute(&db, "user-1", "2025-01-09", || {
            calls.set(calls.get() + 1);
            Ok(foods())
        })
        .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(first.id, second.id);
        assert_eq!(first.nutrition, second.nutrition);
        assert_eq!(first.updated_at, second.updated_at);
    }

    #[test]
    fn test_empty_food_list_yields_zero_total() {
        let db = test_db();

        let total = get_or_compute(&db, "user-1", "2025-01-09", || Ok(vec![])).unwrap();
        assert_eq!(total.nutrition, NutrientProfile::zero());
    }

    #[test]
    fn test_recompute_overwrites_cache() {
        let db = test_db();

        get_or_compute(&db, "user-1", "2025-01-09", || Ok(foods())).unwrap();

        // A food was deleted; the refreshed total reflects the new list
        let remaining = vec![foods()[0]];
        let total = recompute(&db, "user-1", "2025-01-09", || Ok(remaining)).unwrap();
        assert_eq!(total.nutrition.calories, 370.0);

        let cached = get_or_compute(&db, "user-1", "2025-01-09", || {
            panic!("loader must not run on a warm cache")
        })
        .unwrap();
        assert_eq!(cached.nutrition.calories, 370.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let db = test_db();

        let first = recompute(&db, "user-1", "2025-01-09", || Ok(foods())).unwrap();
        let second = recompute(&db, "user-1", "2025-01-09", || Ok(foods())).unwrap();

        assert_eq!(first.nutrition, second.nutrition);
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn test_non_finite_food_values_are_coerced() {
        let db = test_db();
        let dirty = vec![NutrientProfile {
            calories: f64::NAN,
            protein: f64::INFINITY,
            carbs: 40.0,
            fat: 10.0,
            fiber: -2.0,
        }];

        let total = recompute(&db, "user-1", "2025-01-09", || Ok(dirty)).unwrap();
        assert_eq!(total.nutrition.calories, 0.0);
        assert_eq!(total.nutrition.protein, 0.0);
        assert_eq!(total.nutrition.carbs, 40.0);
        assert_eq!(total.nutrition.fiber, 0.0);
    }

    #[test]
    fn test_missing_identifiers_are_errors() {
        let db = test_db();

        let err = get_or_compute(&db, "", "2025-01-09", || Ok(vec![])).unwrap_err();
        assert!(matches!(err, AggregateError::MissingUserId));

        let err = get_or_compute(&db, "user-1", "not-a-date", || Ok(vec![])).unwrap_err();
        assert!(matches!(err, AggregateError::InvalidDate(_)));

        let err = get_or_compute(&db, "user-1", "2025-13-40", || Ok(vec![])).unwrap_err();
        assert!(matches!(err, AggregateError::InvalidDate(_)));
    }

    #[test]
    fn test_loader_failure_propagates() {
        let db = test_db();

        let err = get_or_compute(&db, "user-1", "2025-01-09", || {
            Err("document store unavailable".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, AggregateError::LoadFoods(_)));

        // Nothing was persisted
        let conn = db.get_conn().unwrap();
        assert!(DailyTotal::get(&conn, "user-1", "2025-01-09").unwrap().is_none());
    }
}
