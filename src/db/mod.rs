//! Database module
//!
//! SQLite connection pooling and migrations for the daily totals cache.

pub mod connection;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};
