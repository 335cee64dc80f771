//! Comments module
//!
//! Per-nutrient qualitative feedback against daily or meal-portion targets.

pub mod generator;

pub use generator::{
    generate_all, generate_for_nutrient, CommentBand, CommentSet, NutrientComment, FALLBACK_ICON,
};
