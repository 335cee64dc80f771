//! Per-nutrient comparison reporting
//!
//! Quantity adequacy against the target, per nutrient: raw percentages and
//! deviations plus the composition ratios the balance score is built from.
//! This is the portion-size view the balance score deliberately leaves out.

use serde::Serialize;

use crate::models::{Nutrient, NutrientProfile};

use super::ratios::MacroRatios;

/// Comparison of one nutrient between a food and its target
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NutrientComparison {
    pub food_value: f64,
    pub target_value: f64,
    /// Percentage of target, unclamped (0 when the target is non-positive)
    pub percentage: f64,
    /// percentage - 100; positive means over target
    pub deviation: f64,
    /// Share of the food's four-macro total (0 for calories)
    pub food_ratio: f64,
    /// Share of the target's four-macro total (0 for calories)
    pub target_ratio: f64,
    pub ratio_difference: f64,
}

impl NutrientComparison {
    fn new(food_value: f64, target_value: f64, food_ratio: f64, target_ratio: f64) -> Self {
        let percentage = if target_value > 0.0 {
            food_value / target_value * 100.0
        } else {
            0.0
        };

        Self {
            food_value,
            target_value,
            percentage,
            deviation: percentage - 100.0,
            food_ratio,
            target_ratio,
            ratio_difference: (food_ratio - target_ratio).abs(),
        }
    }
}

/// Comparison report: one entry per macro plus calories
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComparisonReport {
    pub calories: NutrientComparison,
    pub protein: NutrientComparison,
    pub carbs: NutrientComparison,
    pub fat: NutrientComparison,
    pub fiber: NutrientComparison,
}

impl ComparisonReport {
    /// Look up the comparison for a single nutrient
    pub fn get(&self, nutrient: Nutrient) -> &NutrientComparison {
        match nutrient {
            Nutrient::Calories => &self.calories,
            Nutrient::Protein => &self.protein,
            Nutrient::Carbs => &self.carbs,
            Nutrient::Fat => &self.fat,
            Nutrient::Fiber => &self.fiber,
        }
    }
}

/// Compare a food profile against a target profile, nutrient by nutrient
pub fn compare(food: &NutrientProfile, target: &NutrientProfile) -> ComparisonReport {
    let food = food.sanitized();
    let target = target.sanitized();

    let food_ratios = MacroRatios::from_profile(&food);
    let target_ratios = MacroRatios::from_profile(&target);

    ComparisonReport {
        // Calories sit outside macro composition; their ratios stay 0
        calories: NutrientComparison::new(food.calories, target.calories, 0.0, 0.0),
        protein: NutrientComparison::new(
            food.protein,
            target.protein,
            food_ratios.protein,
            target_ratios.protein,
        ),
        carbs: NutrientComparison::new(
            food.carbs,
            target.carbs,
            food_ratios.carbs,
            target_ratios.carbs,
        ),
        fat: NutrientComparison::new(food.fat, target.fat, food_ratios.fat, target_ratios.fat),
        fiber: NutrientComparison::new(
            food.fiber,
            target.fiber,
            food_ratios.fiber,
            target_ratios.fiber,
        ),
    }
}
