//! Balance scoring
//!
//! The 0-100 nutritional balance score: how closely a food's macro
//! composition matches a target's composition. Deliberately independent of
//! portion size; quantity adequacy is reported separately as comparison
//! percentages.

use crate::models::{MealFallback, MealType, NutrientProfile, TargetProfile};

use super::ratios::MacroRatios;

/// Score one nutrient profile against one target profile
pub fn score_single(food: &NutrientProfile, target: &NutrientProfile) -> u8 {
    let food_ratios = MacroRatios::from_profile(food);
    let target_ratios = MacroRatios::from_profile(target);

    let avg_difference = food_ratios.mean_abs_difference(&target_ratios);
    (100.0 - avg_difference).round().clamp(0.0, 100.0) as u8
}

/// Score against the meal-portion-adjusted target for a meal slot
///
/// The effective target is the configured per-meal portion when present,
/// otherwise resolved per the fallback policy.
pub fn score_by_meal_type(
    food: &NutrientProfile,
    target_profile: &TargetProfile,
    meal_type: MealType,
    fallback: MealFallback,
) -> u8 {
    let target = target_profile.resolve(meal_type, fallback);
    score_single(food, &target)
}

/// Score the combined composition of several foods against one target
pub fn score_combined(foods: &[NutrientProfile], target: &NutrientProfile) -> u8 {
    let combined: NutrientProfile = foods.iter().map(|f| f.sanitized()).sum();
    score_single(&combined, target)
}
