//! Scoring module
//!
//! Calorie derivation, ratio normalization, balance scoring, score
//! interpretation, and per-nutrient comparison reporting.

pub mod balance;
pub mod calories;
pub mod comparison;
pub mod interpret;
pub mod ratios;

pub use balance::{score_by_meal_type, score_combined, score_single};
pub use calories::derive_calories;
pub use comparison::{compare, ComparisonReport, NutrientComparison};
pub use interpret::{interpret, Interpretation, ScoreResult};
pub use ratios::MacroRatios;
