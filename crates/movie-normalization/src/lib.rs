//! Movie dataset normalization.
//!
//! Turns a raw [`movie_ingest::CsvTable`] into typed [`movie_model::MovieRecord`]s.
//! Rows that fail a cleaning rule are dropped and counted; structural problems
//! with the table itself abort the whole batch.

pub mod date;
mod error;
mod layout;
mod normalizer;
pub mod options;
mod report;

pub use error::{NormalizationError, Result, RowError};
pub use normalizer::{NormalizationOutcome, NormalizedDataset, RecordNormalizer, normalize_file};
pub use options::{DEFAULT_DROP_COLUMNS, NormalizationOptions};
pub use report::{DropReason, NormalizationReport};
