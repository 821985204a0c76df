use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Category of a dropped row, used for the completion summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    MissingReleaseDate,
    InvalidReleaseDate,
    YearOutOfRange,
    NonNumericBudget,
    BudgetOutOfRange,
    InvalidRevenue,
    MalformedNested,
}

impl DropReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingReleaseDate => "missing release date",
            Self::InvalidReleaseDate => "invalid release date",
            Self::YearOutOfRange => "release year out of range",
            Self::NonNumericBudget => "non-numeric budget",
            Self::BudgetOutOfRange => "budget out of range",
            Self::InvalidRevenue => "invalid revenue",
            Self::MalformedNested => "malformed nested value",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row accounting for one normalization batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationReport {
    pub input_rows: usize,
    pub output_rows: usize,
    pub dropped_rows: usize,
    pub dropped_by_reason: BTreeMap<DropReason, usize>,
    /// Input columns removed by the drop list.
    pub discarded_columns: Vec<String>,
}

impl NormalizationReport {
    pub(crate) fn record_kept(&mut self) {
        self.input_rows += 1;
        self.output_rows += 1;
    }

    pub(crate) fn record_dropped(&mut self, reason: DropReason) {
        self.input_rows += 1;
        self.dropped_rows += 1;
        *self.dropped_by_reason.entry(reason).or_insert(0) += 1;
    }

    pub fn dropped(&self, reason: DropReason) -> usize {
        self.dropped_by_reason.get(&reason).copied().unwrap_or(0)
    }
}
