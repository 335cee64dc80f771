//! Daily progress view
//!
//! Display-clamped percentage-of-target per nutrient. A simpler view than
//! the balance score: it measures quantity consumed, caps at 100, and must
//! not be confused with composition scoring.

use serde::Serialize;

use crate::models::NutrientProfile;

/// Percentage of the daily target consumed per nutrient, clamped to 0-100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailyProgress {
    pub calories: u8,
    pub protein: u8,
    pub carbs: u8,
    pub fat: u8,
    pub fiber: u8,
}

/// Compute clamped progress of a running total against the daily target
pub fn daily_progress(current: &NutrientProfile, target: &NutrientProfile) -> DailyProgress {
    DailyProgress {
        calories: clamped_percentage(current.calories, target.calories),
        protein: clamped_percentage(current.protein, target.protein),
        carbs: clamped_percentage(current.carbs, target.carbs),
        fat: clamped_percentage(current.fat, target.fat),
        fiber: clamped_percentage(current.fiber, target.fiber),
    }
}

/// min(round(current/target*100), 100); 0 for non-positive or non-finite
/// targets and never below 0 or non-finite
fn clamped_percentage(current: f64, target: f64) -> u8 {
    if !target.is_finite() || target <= 0.0 || !current.is_finite() {
        return 0;
    }

    let percentage = (current.max(0.0) / target * 100.0).round();
    percentage.min(100.0) as u8
}
