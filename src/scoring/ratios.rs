//! Macro ratio normalization
//!
//! Converts macro grams into percentage-of-total composition ratios. This
//! is the only place macro composition is compared; calories are excluded
//! because they are a derived dimension of the same four grams.

use serde::{Deserialize, Serialize};

use crate::models::NutrientProfile;

/// Percentage share of each macro over the four-macro gram total
///
/// Sums to 100, or is all-zero for a degenerate profile with no macros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
}

impl MacroRatios {
    /// Compute composition ratios for a profile
    pub fn from_profile(profile: &NutrientProfile) -> Self {
        let clean = profile.sanitized();
        let total = clean.macro_grams();

        if total <= 0.0 {
            return Self::default();
        }

        Self {
            protein: clean.protein / total * 100.0,
            fat: clean.fat / total * 100.0,
            carbs: clean.carbs / total * 100.0,
            fiber: clean.fiber / total * 100.0,
        }
    }

    /// Mean absolute difference against another set of ratios
    pub fn mean_abs_difference(&self, other: &MacroRatios) -> f64 {
        ((self.protein - other.protein).abs()
            + (self.fat - other.fat).abs()
            + (self.carbs - other.carbs).abs()
            + (self.fiber - other.fiber).abs())
            / 4.0
    }
}
