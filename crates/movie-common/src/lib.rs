//! Shared utilities for the movie crates.
//!
//! This crate provides the numeric parsing and formatting helpers used by
//! ingestion, normalization and artifact output.

pub mod numeric;

// Re-export commonly used functions at crate root for convenience
pub use numeric::{format_numeric, is_digit_string, parse_f64};
