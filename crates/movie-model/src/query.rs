//! Result types returned by the analytic queries.
//!
//! Every result echoes the argument it was asked for, exactly as given.

use serde::{Deserialize, Serialize};

/// Number of movies released in a (localized) month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    pub month: String,
    pub count: usize,
}

/// Number of movies released on a (localized) weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayCount {
    pub weekday: String,
    pub count: usize,
}

/// Aggregate revenue of a franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranchiseStats {
    pub franchise: String,
    pub count: usize,
    pub total_revenue: f64,
    /// `total_revenue / count`, zero for an unknown franchise.
    pub average_revenue: f64,
}

/// Number of movies produced in a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

/// Aggregate revenue of a production company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyStats {
    pub company: String,
    pub total_revenue: f64,
    pub count: usize,
}

/// Financial return of a single title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleReturn {
    pub title: String,
    pub investment: f64,
    pub revenue: f64,
    pub return_ratio: f64,
    pub year: i16,
}
