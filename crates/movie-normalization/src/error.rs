use movie_ingest::{IngestError, NestedValueError};
use thiserror::Error;

use crate::report::DropReason;

/// Errors that abort a normalization batch.
#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

pub type Result<T> = std::result::Result<T, NormalizationError>;

/// Why a single row was rejected. Never fatal to the batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("release_date is missing")]
    MissingReleaseDate,

    #[error("release_date '{value}' is not a date")]
    InvalidReleaseDate { value: String },

    #[error("release year {year} does not fit in 16 bits")]
    YearOutOfRange { year: i32 },

    #[error("budget '{value}' is not a digit-only number")]
    NonNumericBudget { value: String },

    #[error("budget of {digits} digits does not fit a finite number")]
    BudgetOutOfRange { digits: usize },

    #[error("revenue '{value}' is not numeric")]
    InvalidRevenue { value: String },

    #[error("{column}: {source}")]
    MalformedNested {
        column: String,
        #[source]
        source: NestedValueError,
    },
}

impl RowError {
    pub fn reason(&self) -> DropReason {
        match self {
            Self::MissingReleaseDate => DropReason::MissingReleaseDate,
            Self::InvalidReleaseDate { .. } => DropReason::InvalidReleaseDate,
            Self::YearOutOfRange { .. } => DropReason::YearOutOfRange,
            Self::NonNumericBudget { .. } => DropReason::NonNumericBudget,
            Self::BudgetOutOfRange { .. } => DropReason::BudgetOutOfRange,
            Self::InvalidRevenue { .. } => DropReason::InvalidRevenue,
            Self::MalformedNested { .. } => DropReason::MalformedNested,
        }
    }
}
