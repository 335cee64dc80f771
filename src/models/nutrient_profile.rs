//! Shared nutrient profile data structure
//!
//! Used across food records, targets, daily totals, and scoring.

use serde::{Deserialize, Serialize};

/// Tracked nutrient kinds: the four macros plus derived calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
}

impl Nutrient {
    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
            Nutrient::Fiber => "fiber",
        }
    }

    /// Display name for comment sentences
    pub fn display_name(&self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbohydrates",
            Nutrient::Fat => "Fat",
            Nutrient::Fiber => "Fiber",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "calories" | "calorie" => Some(Nutrient::Calories),
            "protein" => Some(Nutrient::Protein),
            "carbs" | "carb" | "carbohydrate" | "carbohydrates" => Some(Nutrient::Carbs),
            "fat" => Some(Nutrient::Fat),
            "fiber" | "fibre" => Some(Nutrient::Fiber),
            _ => None,
        }
    }

    /// All tracked nutrients, calories first
    pub const ALL: [Nutrient; 5] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Fiber,
    ];
}

/// Nutritional information for one food, target share, or daily total
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64, // grams
    #[serde(default)]
    pub carbs: f64, // grams
    #[serde(default)]
    pub fat: f64, // grams
    #[serde(default)]
    pub fiber: f64, // grams
}

impl NutrientProfile {
    /// Create a new NutrientProfile with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Coerce non-finite values to 0 and clamp negatives to 0
    ///
    /// Malformed numeric input is normalized rather than rejected so that
    /// scoring and aggregation always produce a displayable result.
    pub fn sanitized(&self) -> Self {
        Self {
            calories: sanitize(self.calories),
            protein: sanitize(self.protein),
            carbs: sanitize(self.carbs),
            fat: sanitize(self.fat),
            fiber: sanitize(self.fiber),
        }
    }

    /// Sum of the four tracked macros in grams, excluding calories
    pub fn macro_grams(&self) -> f64 {
        self.protein + self.carbs + self.fat + self.fiber
    }

    /// Look up a single nutrient value
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
        }
    }

    /// Scale nutrient values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
        }
    }

    /// Add another profile to this one
    pub fn add(&self, other: &NutrientProfile) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.max(0.0)
}

impl std::ops::Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, other: NutrientProfile) -> NutrientProfile {
        NutrientProfile::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutrientProfile {
    type Output = NutrientProfile;

    fn mul(self, multiplier: f64) -> NutrientProfile {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientProfile::zero(), |acc, n| acc + n)
    }
}
