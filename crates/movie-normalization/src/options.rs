//! Configuration options for normalization.

use serde::{Deserialize, Serialize};

/// Administrative columns with no analytic value.
pub const DEFAULT_DROP_COLUMNS: [&str; 7] = [
    "adult",
    "imdb_id",
    "homepage",
    "original_title",
    "poster_path",
    "video",
    "vote_count",
];

/// Options for normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOptions {
    /// Columns removed before any other step (matched case-insensitively).
    pub drop_columns: Vec<String>,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            drop_columns: DEFAULT_DROP_COLUMNS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also drop `column`.
    #[must_use]
    pub fn with_drop_column(mut self, column: impl Into<String>) -> Self {
        let column = column.into();
        if !self.drops(&column) {
            self.drop_columns.push(column);
        }
        self
    }

    /// Keep `column` even if it is in the drop list.
    #[must_use]
    pub fn with_kept_column(mut self, column: &str) -> Self {
        self.drop_columns
            .retain(|existing| !existing.eq_ignore_ascii_case(column));
        self
    }

    pub fn drops(&self, column: &str) -> bool {
        self.drop_columns
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_drop_administrative_columns() {
        let options = NormalizationOptions::default();
        assert!(options.drops("imdb_id"));
        assert!(options.drops("POSTER_PATH"));
        assert!(!options.drops("budget"));
    }

    #[test]
    fn builder_adds_and_removes_columns() {
        let options = NormalizationOptions::new()
            .with_drop_column("tagline")
            .with_drop_column("TAGLINE")
            .with_kept_column("homepage");
        assert!(options.drops("tagline"));
        assert!(!options.drops("homepage"));
        assert_eq!(options.drop_columns.len(), 7);
    }
}
