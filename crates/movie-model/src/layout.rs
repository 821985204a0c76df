//! Column layout of a normalized dataset.
//!
//! The normalizer keeps every analytic input column, so the artifact writer
//! needs to know which typed field (or passthrough slot) backs each column.

use serde::{Deserialize, Serialize};

/// Which record field a column is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Title,
    Budget,
    Revenue,
    ReleaseDate,
    ReleaseYear,
    Return,
    Collection,
    ProductionCountries,
    ProductionCompanies,
    /// Index into [`crate::MovieRecord::extra`].
    Extra(usize),
}

/// A named output column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputColumn {
    pub name: String,
    pub kind: ColumnKind,
}

impl OutputColumn {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
