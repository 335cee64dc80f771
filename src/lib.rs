//! Macrobalance Library
//!
//! Nutrition balance scoring, per-nutrient feedback, and daily aggregation.
//!
//! The crate is a pure library: callers load food and target records, hand
//! the engine clean numeric profiles, and persist or display what it
//! returns. The only state the engine owns is the `daily_totals` cache.

pub mod comments;
pub mod daily;
pub mod db;
pub mod models;
pub mod scoring;
