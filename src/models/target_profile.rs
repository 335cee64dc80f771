//! Target nutrition profile
//!
//! A user's full-day nutrition target plus optional per-meal portions.

use serde::{Deserialize, Serialize};

use super::{MealType, NutrientProfile};

/// System-wide fallback target, supplied explicitly by callers when no
/// target nutrition record is resolvable for a user
pub const DEFAULT_TARGET: NutrientProfile = NutrientProfile {
    calories: 2000.0,
    protein: 80.0,
    carbs: 150.0,
    fat: 80.0,
    fiber: 0.0,
};

/// Per-meal target portions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealTargets {
    pub breakfast: Option<NutrientProfile>,
    pub lunch: Option<NutrientProfile>,
    pub dinner: Option<NutrientProfile>,
    pub snack: Option<NutrientProfile>,
}

impl MealTargets {
    /// Look up the configured portion for a meal slot
    pub fn get(&self, meal_type: MealType) -> Option<&NutrientProfile> {
        match meal_type {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
            MealType::Snack => self.snack.as_ref(),
            MealType::Unspecified => None,
        }
    }
}

/// What to score against when no per-meal target is configured for the
/// requested meal slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealFallback {
    /// Use the full-day target
    #[default]
    Daily,
    /// Use the daily target scaled by the meal's default share
    DailyShare,
}

/// A user's target nutrition: a full-day profile plus optional per-meal
/// portions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProfile {
    pub daily: NutrientProfile,
    #[serde(default)]
    pub meals: Option<MealTargets>,
}

impl TargetProfile {
    /// Create a target with only a daily profile
    pub fn daily_only(daily: NutrientProfile) -> Self {
        Self { daily, meals: None }
    }

    /// Resolve the effective target for a meal slot
    ///
    /// Uses the configured per-meal portion when present; otherwise applies
    /// the fallback policy. Unspecified meal types always resolve to the
    /// daily target.
    pub fn resolve(&self, meal_type: MealType, fallback: MealFallback) -> NutrientProfile {
        if let Some(meals) = &self.meals {
            if let Some(portion) = meals.get(meal_type) {
                return portion.sanitized();
            }
        }

        match (meal_type, fallback) {
            (MealType::Unspecified, _) | (_, MealFallback::Daily) => self.daily.sanitized(),
            (_, MealFallback::DailyShare) => {
                self.daily.sanitized().scale(meal_type.default_share())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily() -> NutrientProfile {
        NutrientProfile {
            calories: 2000.0,
            protein: 100.0,
            carbs: 200.0,
            fat: 60.0,
            fiber: 40.0,
        }
    }

    #[test]
    fn test_resolve_uses_configured_meal_portion() {
        let lunch = NutrientProfile {
            calories: 700.0,
            protein: 35.0,
            carbs: 70.0,
            fat: 21.0,
            fiber: 14.0,
        };
        let target = TargetProfile {
            daily: daily(),
            meals: Some(MealTargets {
                lunch: Some(lunch),
                ..Default::default()
            }),
        };

        let resolved = target.resolve(MealType::Lunch, MealFallback::Daily);
        assert_eq!(resolved.calories, 700.0);
        assert_eq!(resolved.protein, 35.0);
    }

    #[test]
    fn test_resolve_falls_back_to_daily() {
        let target = TargetProfile::daily_only(daily());

        let resolved = target.resolve(MealType::Breakfast, MealFallback::Daily);
        assert_eq!(resolved.calories, 2000.0);
        assert_eq!(resolved.protein, 100.0);
    }

    #[test]
    fn test_resolve_daily_share_scales_by_meal_share() {
        let target = TargetProfile::daily_only(daily());

        let resolved = target.resolve(MealType::Breakfast, MealFallback::DailyShare);
        assert_eq!(resolved.calories, 500.0);
        assert_eq!(resolved.protein, 25.0);

        let resolved = target.resolve(MealType::Lunch, MealFallback::DailyShare);
        assert_eq!(resolved.calories, 700.0);
    }

    #[test]
    fn test_resolve_unspecified_always_daily() {
        let target = TargetProfile::daily_only(daily());

        let resolved = target.resolve(MealType::Unspecified, MealFallback::DailyShare);
        assert_eq!(resolved.calories, 2000.0);
    }

    #[test]
    fn test_default_target_values() {
        assert_eq!(DEFAULT_TARGET.calories, 2000.0);
        assert_eq!(DEFAULT_TARGET.protein, 80.0);
        assert_eq!(DEFAULT_TARGET.carbs, 150.0);
        assert_eq!(DEFAULT_TARGET.fat, 80.0);
    }
}
