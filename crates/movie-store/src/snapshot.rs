use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Datelike, Month};
use tracing::{info, info_span, warn};

use movie_locale::{LocaleError, month_label, weekday_label};
use movie_model::MovieRecord;
use movie_normalization::{NormalizationOptions, normalize_file};

use crate::error::{Result, StoreError};

/// Localized release month and weekday of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseLabels {
    pub month: &'static str,
    pub weekday: &'static str,
}

impl ReleaseLabels {
    fn for_record(index: usize, record: &MovieRecord) -> Result<Self> {
        let date = record.release_date;
        let month = u8::try_from(date.month())
            .ok()
            .and_then(|number| Month::try_from(number).ok())
            .ok_or_else(|| StoreError::Locale {
                index,
                source: LocaleError::UnknownLabel {
                    name: date.month().to_string(),
                },
            })?;
        Ok(Self {
            month: month_label(month),
            weekday: weekday_label(date.weekday()),
        })
    }
}

/// Case-insensitive key used by the label and title lookups.
fn fold(value: &str) -> String {
    value.to_lowercase()
}

type Members = HashMap<String, Vec<usize>>;

#[derive(Debug, Default)]
struct Snapshot {
    records: Vec<MovieRecord>,
    labels: Vec<ReleaseLabels>,
    by_month: Members,
    by_weekday: Members,
    by_franchise: Members,
    by_country: Members,
    by_company: Members,
    first_by_title: HashMap<String, usize>,
}

impl Snapshot {
    fn build(records: Vec<MovieRecord>) -> Result<Self> {
        let mut snapshot = Snapshot {
            labels: Vec::with_capacity(records.len()),
            ..Snapshot::default()
        };
        for (index, record) in records.iter().enumerate() {
            let labels = ReleaseLabels::for_record(index, record)?;
            snapshot.by_month.entry(fold(labels.month)).or_default().push(index);
            snapshot
                .by_weekday
                .entry(fold(labels.weekday))
                .or_default()
                .push(index);
            snapshot.labels.push(labels);

            if let Some(name) = record.collection_name() {
                snapshot
                    .by_franchise
                    .entry(name.to_string())
                    .or_default()
                    .push(index);
            }
            // Names are de-duplicated per record during normalization.
            for country in &record.production_countries {
                snapshot
                    .by_country
                    .entry(country.name.clone())
                    .or_default()
                    .push(index);
            }
            for company in &record.production_companies {
                snapshot
                    .by_company
                    .entry(company.name.clone())
                    .or_default()
                    .push(index);
            }
            snapshot
                .first_by_title
                .entry(fold(&record.title))
                .or_insert(index);
        }
        snapshot.records = records;
        Ok(snapshot)
    }
}

fn members<'a>(map: &'a Members, key: &str) -> &'a [usize] {
    map.get(key).map(Vec::as_slice).unwrap_or(&[])
}

/// Immutable handle to the loaded dataset.
///
/// Cloning is cheap and clones share the same snapshot, so the handle can be
/// passed to any number of threads.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    inner: Arc<Snapshot>,
}

impl DatasetStore {
    /// Build the snapshot from normalized records, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Locale`] if a release date yields a month or
    /// weekday name the label tables do not know.
    pub fn load(records: Vec<MovieRecord>) -> Result<Self> {
        let span = info_span!("load_store", records = records.len());
        let _guard = span.enter();
        let start = Instant::now();
        let snapshot = Snapshot::build(records)?;
        info!(
            records = snapshot.records.len(),
            franchises = snapshot.by_franchise.len(),
            countries = snapshot.by_country.len(),
            companies = snapshot.by_company.len(),
            duration_ms = start.elapsed().as_millis(),
            "snapshot loaded"
        );
        Ok(Self {
            inner: Arc::new(snapshot),
        })
    }

    /// Load a previously written artifact.
    ///
    /// The artifact is passed through the normalizer again; for a genuine
    /// artifact this drops nothing.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or the snapshot cannot be built.
    pub fn open_artifact(path: &Path) -> Result<Self> {
        let outcome = normalize_file(path, &NormalizationOptions::default())?;
        if outcome.report.dropped_rows > 0 {
            warn!(
                path = %path.display(),
                dropped_rows = outcome.report.dropped_rows,
                "artifact contained rows that failed normalization"
            );
        }
        Self::load(outcome.dataset.records)
    }

    /// Every record, in dataset order.
    pub fn all(&self) -> impl Iterator<Item = &MovieRecord> + '_ {
        self.inner.records.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.inner.records.get(index)
    }

    pub fn labels(&self, index: usize) -> Option<ReleaseLabels> {
        self.inner.labels.get(index).copied()
    }

    /// Records released in a localized month, matched case-insensitively.
    pub fn month_members(&self, label: &str) -> &[usize] {
        members(&self.inner.by_month, &fold(label))
    }

    /// Records released on a localized weekday, matched case-insensitively.
    pub fn weekday_members(&self, label: &str) -> &[usize] {
        members(&self.inner.by_weekday, &fold(label))
    }

    /// Records whose franchise name equals `name` exactly.
    pub fn franchise_members(&self, name: &str) -> &[usize] {
        members(&self.inner.by_franchise, name)
    }

    /// Records produced in the country named exactly `name`.
    pub fn country_members(&self, name: &str) -> &[usize] {
        members(&self.inner.by_country, name)
    }

    /// Records produced by the company named exactly `name`.
    pub fn company_members(&self, name: &str) -> &[usize] {
        members(&self.inner.by_company, name)
    }

    /// First record (in dataset order) whose title matches case-insensitively.
    pub fn find_title(&self, title: &str) -> Option<&MovieRecord> {
        let index = *self.inner.first_by_title.get(&fold(title))?;
        self.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use movie_model::NamedRef;

    fn record(title: &str, date: (i32, u32, u32)) -> MovieRecord {
        let release_date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        MovieRecord {
            title: title.to_string(),
            budget: 0.0,
            revenue: 0.0,
            release_date,
            release_year: 2000,
            return_ratio: 0.0,
            collection: None,
            production_countries: vec![NamedRef::new("Spain")],
            production_companies: Vec::new(),
            extra: Vec::new(),
        }
    }

    #[test]
    fn labels_are_precomputed() {
        // 2000-01-01 was a Saturday.
        let store = DatasetStore::load(vec![record("A", (2000, 1, 1))]).unwrap();
        assert_eq!(
            store.labels(0),
            Some(ReleaseLabels {
                month: "Enero",
                weekday: "Sábado",
            })
        );
        assert_eq!(store.month_members("ENERO"), &[0]);
        assert_eq!(store.weekday_members("sábado"), &[0]);
        assert!(store.month_members("January").is_empty());
    }

    #[test]
    fn labels_follow_the_calendar() {
        let store = DatasetStore::load(vec![
            record("A", (1995, 10, 30)),
            record("B", (1999, 12, 31)),
            record("C", (2024, 2, 29)),
        ])
        .unwrap();
        let labels: Vec<_> = (0..3).filter_map(|index| store.labels(index)).collect();
        assert_eq!(
            labels,
            vec![
                ReleaseLabels { month: "Octubre", weekday: "Lunes" },
                ReleaseLabels { month: "Diciembre", weekday: "Viernes" },
                ReleaseLabels { month: "Febrero", weekday: "Jueves" },
            ]
        );
    }

    #[test]
    fn first_title_wins() {
        let store = DatasetStore::load(vec![
            record("Hamlet", (1990, 12, 19)),
            record("hamlet", (1996, 12, 25)),
        ])
        .unwrap();
        let found = store.find_title("HAMLET").unwrap();
        assert_eq!(found.release_date.format("%Y").to_string(), "1990");
    }

    #[test]
    fn clones_share_the_snapshot() {
        let store = DatasetStore::load(vec![record("A", (2000, 1, 1))]).unwrap();
        let clone = store.clone();
        assert!(Arc::ptr_eq(&store.inner, &clone.inner));
        assert_eq!(clone.country_members("Spain"), &[0]);
        assert!(clone.country_members("spain").is_empty());
    }

    #[test]
    fn empty_store() {
        let store = DatasetStore::load(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.all().count(), 0);
        assert!(store.find_title("").is_none());
    }
}
