use tracing::debug;

use movie_model::{
    CompanyStats, CountryCount, FranchiseStats, MonthCount, TitleReturn, WeekdayCount,
};
use movie_store::DatasetStore;

use crate::error::{QueryError, Result};

/// Stateless query operations bound to a snapshot.
///
/// The engine holds only a shared store handle; cloning it or calling it from
/// several threads at once is fine.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: DatasetStore,
}

impl QueryEngine {
    pub fn new(store: DatasetStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    fn total_revenue(&self, members: &[usize]) -> f64 {
        members
            .iter()
            .filter_map(|&index| self.store.get(index))
            .map(|record| record.revenue)
            .sum()
    }

    /// Movies released in a localized month (`"Enero"`), any letter case.
    pub fn count_by_month(&self, month: &str) -> MonthCount {
        MonthCount {
            month: month.to_string(),
            count: self.store.month_members(month).len(),
        }
    }

    /// Movies released on a localized weekday (`"Lunes"`), any letter case.
    pub fn count_by_weekday(&self, weekday: &str) -> WeekdayCount {
        WeekdayCount {
            weekday: weekday.to_string(),
            count: self.store.weekday_members(weekday).len(),
        }
    }

    /// Count, total and average revenue of a franchise (exact name match).
    pub fn franchise_stats(&self, franchise: &str) -> FranchiseStats {
        let members = self.store.franchise_members(franchise);
        let count = members.len();
        let total_revenue = self.total_revenue(members);
        let average_revenue = if count > 0 {
            total_revenue / count as f64
        } else {
            0.0
        };
        FranchiseStats {
            franchise: franchise.to_string(),
            count,
            total_revenue,
            average_revenue,
        }
    }

    /// Movies with `country` among their production countries.
    pub fn count_by_country(&self, country: &str) -> CountryCount {
        CountryCount {
            country: country.to_string(),
            count: self.store.country_members(country).len(),
        }
    }

    /// Total revenue and movie count of a production company.
    pub fn company_stats(&self, company: &str) -> CompanyStats {
        let members = self.store.company_members(company);
        CompanyStats {
            company: company.to_string(),
            total_revenue: self.total_revenue(members),
            count: members.len(),
        }
    }

    /// Budget, revenue, return and year of a title.
    ///
    /// Titles match case-insensitively; with duplicates the first record in
    /// dataset order wins.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotFound`] when no record has that title.
    pub fn title_return(&self, title: &str) -> Result<TitleReturn> {
        let Some(record) = self.store.find_title(title) else {
            debug!(title, "title not found");
            return Err(QueryError::NotFound {
                title: title.to_string(),
            });
        };
        Ok(TitleReturn {
            title: title.to_string(),
            investment: record.budget,
            revenue: record.revenue,
            return_ratio: record.return_ratio,
            year: record.release_year,
        })
    }
}
