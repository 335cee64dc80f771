//! Per-nutrient comment generation
//!
//! For each tracked nutrient, computes percentage-of-target and selects a
//! qualitative band with an icon and a short templated sentence. The band
//! thresholds and the percentage formula are the stable contract; the
//! sentence wording is presentation.

use serde::Serialize;

use crate::models::{MealFallback, MealType, Nutrient, NutrientProfile, TargetProfile};

/// Generic icon for free-form comments supplied outside the generator
pub const FALLBACK_ICON: &str = "💬";

/// Qualitative band for a nutrient's percentage of target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentBand {
    /// Below 70% of target
    Low,
    /// 70-130% of target
    Balanced,
    /// Above 130% of target
    High,
}

impl CommentBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentBand::Low => "low",
            CommentBand::Balanced => "balanced",
            CommentBand::High => "high",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CommentBand::Low => "⬇️",
            CommentBand::Balanced => "✅",
            CommentBand::High => "⬆️",
        }
    }

    /// Select the band for a rounded percentage-of-target
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            0..=69 => CommentBand::Low,
            70..=130 => CommentBand::Balanced,
            _ => CommentBand::High,
        }
    }
}

/// Feedback for one nutrient
#[derive(Debug, Clone, Serialize)]
pub struct NutrientComment {
    pub nutrient: Nutrient,
    pub meal_type: MealType,
    /// Rounded percentage of target; 0 when the target is non-positive
    pub percentage: u32,
    pub band: CommentBand,
    pub comment: String,
    pub icon: &'static str,
}

/// Feedback for every tracked nutrient of one food
#[derive(Debug, Clone, Serialize)]
pub struct CommentSet {
    pub calories: NutrientComment,
    pub protein: NutrientComment,
    pub fat: NutrientComment,
    pub carbs: NutrientComment,
    pub fiber: NutrientComment,
}

impl CommentSet {
    /// Look up the comment for a single nutrient
    pub fn get(&self, nutrient: Nutrient) -> &NutrientComment {
        match nutrient {
            Nutrient::Calories => &self.calories,
            Nutrient::Protein => &self.protein,
            Nutrient::Carbs => &self.carbs,
            Nutrient::Fat => &self.fat,
            Nutrient::Fiber => &self.fiber,
        }
    }

    /// Iterate the comments in a stable order, calories first
    pub fn iter(&self) -> impl Iterator<Item = &NutrientComment> {
        [
            &self.calories,
            &self.protein,
            &self.carbs,
            &self.fat,
            &self.fiber,
        ]
        .into_iter()
    }
}

/// Generate a comment for one nutrient against its effective target value
pub fn generate_for_nutrient(
    nutrient: Nutrient,
    food_value: f64,
    target_value: f64,
    meal_type: MealType,
) -> NutrientComment {
    let percentage = percentage_of_target(food_value, target_value);
    let band = CommentBand::from_percentage(percentage);

    let scope = match meal_type {
        MealType::Unspecified => "daily",
        specific => specific.as_str(),
    };
    let name = nutrient.display_name();

    let comment = match band {
        CommentBand::Low => {
            format!("{name} is below the {scope} target ({percentage}% of target)")
        }
        CommentBand::Balanced => {
            format!("{name} is on track with the {scope} target ({percentage}% of target)")
        }
        CommentBand::High => {
            format!("{name} is above the {scope} target ({percentage}% of target)")
        }
    };

    NutrientComment {
        nutrient,
        meal_type,
        percentage,
        band,
        comment,
        icon: band.icon(),
    }
}

/// Generate feedback for every tracked nutrient of a food
///
/// The effective target resolves the same way as meal-adjusted scoring:
/// the configured meal portion when present, otherwise the fallback policy.
pub fn generate_all(
    food: &NutrientProfile,
    target_profile: &TargetProfile,
    meal_type: MealType,
    fallback: MealFallback,
) -> CommentSet {
    let food = food.sanitized();
    let target = target_profile.resolve(meal_type, fallback);

    let comment = |nutrient: Nutrient| {
        generate_for_nutrient(nutrient, food.get(nutrient), target.get(nutrient), meal_type)
    };

    CommentSet {
        calories: comment(Nutrient::Calories),
        protein: comment(Nutrient::Protein),
        fat: comment(Nutrient::Fat),
        carbs: comment(Nutrient::Carbs),
        fiber: comment(Nutrient::Fiber),
    }
}

/// Rounded percentage of target; 0 for non-positive or non-finite targets
fn percentage_of_target(food_value: f64, target_value: f64) -> u32 {
    if !target_value.is_finite() || target_value <= 0.0 || !food_value.is_finite() {
        return 0;
    }
    (food_value.max(0.0) / target_value * 100.0).round() as u32
}
