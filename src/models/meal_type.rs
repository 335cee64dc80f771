//! Meal type enum
//!
//! Discriminates which meal slot a food belongs to.

use serde::{Deserialize, Serialize};

/// Meal type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Unspecified,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Unspecified => "unspecified",
        }
    }

    /// Unknown strings map to Unspecified: no meal-specific adjustment
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            "snack" => MealType::Snack,
            _ => MealType::Unspecified,
        }
    }

    /// Default share of the daily target allocated to this meal slot
    ///
    /// Shares are independently configured; they are not required to sum
    /// to exactly 1.0 with user-supplied meal targets in play.
    pub fn default_share(&self) -> f64 {
        match self {
            MealType::Breakfast => 0.25,
            MealType::Lunch => 0.35,
            MealType::Dinner => 0.30,
            MealType::Snack => 0.10,
            MealType::Unspecified => 1.0,
        }
    }
}
