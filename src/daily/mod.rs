//! Daily aggregation module
//!
//! Cached per-day nutrient totals and the clamped daily-progress view.

pub mod aggregator;
pub mod progress;

pub use aggregator::{get_or_compute, recompute, AggregateError};
pub use progress::{daily_progress, DailyProgress};
