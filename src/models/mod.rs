//! Data models
//!
//! Rust structs representing nutrient profiles, targets, and cached totals.

mod daily_total;
mod food_record;
mod meal_type;
mod nutrient_profile;
mod target_profile;

pub use daily_total::DailyTotal;
pub use food_record::FoodRecord;
pub use meal_type::MealType;
pub use nutrient_profile::{Nutrient, NutrientProfile};
pub use target_profile::{MealFallback, MealTargets, TargetProfile, DEFAULT_TARGET};
