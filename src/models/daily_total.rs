//! Daily total model
//!
//! Cached per-user, per-date sum of all nutrients consumed.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use super::NutrientProfile;

/// A cached daily nutrient total for one user and calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTotal {
    pub id: i64,
    pub user_id: String,
    pub date: String, // ISO date: "2025-01-09"
    pub nutrition: NutrientProfile,
    pub created_at: String,
    pub updated_at: String,
}

impl DailyTotal {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            date: row.get("date")?,
            nutrition: NutrientProfile {
                calories: row.get("calories")?,
                protein: row.get("protein")?,
                carbs: row.get("carbs")?,
                fat: row.get("fat")?,
                fiber: row.get("fiber")?,
            },
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Get the cached total for a user and date
    pub fn get(conn: &Connection, user_id: &str, date: &str) -> DbResult<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT * FROM daily_totals WHERE user_id = ?1 AND date = ?2")?;

        let result = stmt.query_row(params![user_id, date], Self::from_row);
        match result {
            Ok(total) => Ok(Some(total)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the total for a user and date, overwriting any existing row
    ///
    /// The row is replaced whole, never partially updated; concurrent
    /// writers race last-write-wins.
    pub fn upsert(
        conn: &Connection,
        user_id: &str,
        date: &str,
        nutrition: &NutrientProfile,
    ) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO daily_totals (user_id, date, calories, protein, carbs, fat, fiber)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(user_id, date) DO UPDATE SET
                calories = excluded.calories,
                protein = excluded.protein,
                carbs = excluded.carbs,
                fat = excluded.fat,
                fiber = excluded.fiber,
                updated_at = datetime('now')
            "#,
            params![
                user_id,
                date,
                nutrition.calories,
                nutrition.protein,
                nutrition.carbs,
                nutrition.fat,
                nutrition.fiber,
            ],
        )?;

        Self::get(conn, user_id, date)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// List totals for a user with an optional date range, newest first
    pub fn list(
        conn: &Connection,
        user_id: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
        limit: i64,
    ) -> DbResult<Vec<Self>> {
        let mut sql = String::from("SELECT * FROM daily_totals WHERE user_id = ?1");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(user_id.to_string())];

        if let Some(start) = start_date {
            params_vec.push(Box::new(start.to_string()));
            sql.push_str(&format!(" AND date >= ?{}", params_vec.len()));
        }

        if let Some(end) = end_date {
            params_vec.push(Box::new(end.to_string()));
            sql.push_str(&format!(" AND date <= ?{}", params_vec.len()));
        }

        sql.push_str(" ORDER BY date DESC");

        params_vec.push(Box::new(limit));
        sql.push_str(&format!(" LIMIT ?{}", params_vec.len()));

        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();

        let totals = stmt
            .query_map(params_refs.as_slice(), Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(totals)
    }
}
