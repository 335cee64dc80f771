//! Food record ingestion boundary
//!
//! External food rows expose nullable totals; this is the one place where
//! "absent" and "explicitly zero" are distinguished before arithmetic.

use serde::{Deserialize, Serialize};

use super::{MealType, NutrientProfile};

/// A food record as supplied by a collaborator (document store, analyzer)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodRecord {
    pub total_calorie: Option<f64>,
    pub total_protein: Option<f64>,
    pub total_carb: Option<f64>,
    pub total_fat: Option<f64>,
    pub total_fiber: Option<f64>,
    /// Expected to be one of breakfast|lunch|dinner|snack; anything else
    /// means no meal-specific adjustment
    #[serde(default)]
    pub meal_type: Option<String>,
}

impl FoodRecord {
    /// Convert to a sanitized profile; nulls become 0
    pub fn profile(&self) -> NutrientProfile {
        NutrientProfile {
            calories: self.total_calorie.unwrap_or(0.0),
            protein: self.total_protein.unwrap_or(0.0),
            carbs: self.total_carb.unwrap_or(0.0),
            fat: self.total_fat.unwrap_or(0.0),
            fiber: self.total_fiber.unwrap_or(0.0),
        }
        .sanitized()
    }

    /// The meal slot this food belongs to
    pub fn meal_type(&self) -> MealType {
        self.meal_type
            .as_deref()
            .map(MealType::from_str)
            .unwrap_or(MealType::Unspecified)
    }
}
