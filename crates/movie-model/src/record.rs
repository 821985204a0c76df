//! Normalized movie record and its value objects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named entity a movie refers to: a franchise, a production country or a
/// production company.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

impl NamedRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// One cleaned movie row.
///
/// Records are only produced by the normalizer, which guarantees a parsed
/// release date, a non-negative budget and a `return_ratio` consistent with
/// `revenue / budget`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Title as it appeared in the source (may be empty).
    pub title: String,
    pub budget: f64,
    pub revenue: f64,
    pub release_date: NaiveDate,
    pub release_year: i16,
    /// `revenue / budget`, or `0` when the budget is zero.
    pub return_ratio: f64,
    /// Franchise the movie belongs to, if any.
    pub collection: Option<NamedRef>,
    pub production_countries: Vec<NamedRef>,
    pub production_companies: Vec<NamedRef>,
    /// Values of the passthrough columns, aligned with the dataset layout.
    pub extra: Vec<String>,
}

impl MovieRecord {
    /// Ratio of revenue to budget, zero when nothing was invested.
    pub fn compute_return(revenue: f64, budget: f64) -> f64 {
        if budget > 0.0 { revenue / budget } else { 0.0 }
    }

    pub fn collection_name(&self) -> Option<&str> {
        self.collection.as_ref().map(NamedRef::as_str)
    }
}
