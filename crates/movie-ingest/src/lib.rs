//! Movie dataset ingestion utilities.
//!
//! This crate reads the raw, row-oriented movie metadata table and decodes the
//! nested franchise/country/company cells it contains.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use movie_ingest::{read_csv_table, parse_named_list};
//!
//! let table = read_csv_table(Path::new("data/movies_dataset.csv"))?;
//! let countries = parse_named_list("[{'iso_3166_1': 'US', 'name': 'United States of America'}]")?;
//! ```

mod csv_table;
mod error;
mod nested;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{CsvTable, parse_csv_table, read_csv_table};

// === Nested Values ===
pub use nested::{NestedValueError, parse_literal, parse_named_list, parse_named_ref};
