//! The row-cleaning pipeline.
//!
//! Each row goes through the same ordered narrowing steps:
//! 1. **Prune**: discard administrative columns
//! 2. **Fill**: blank `revenue` and empty `budget` become `"0"`
//! 3. **Date**: drop rows with a missing or unparsable `release_date`
//! 4. **Year**: derive `release_year`
//! 5. **Budget**: drop rows whose budget is not digit-only, then convert
//! 6. **Return**: derive `return = revenue / budget` (0 when budget is 0)
//!
//! Nested franchise/country/company cells are decoded once here so the query
//! side never looks at raw text.

use std::path::Path;
use std::time::Instant;

use chrono::Datelike;
use tracing::{debug, info, info_span};

use movie_common::{is_digit_string, parse_f64};
use movie_ingest::{CsvTable, parse_named_list, parse_named_ref, read_csv_table};
use movie_model::{ColumnKind, MovieRecord, NamedRef, OutputColumn};

use crate::date::parse_release_date;
use crate::error::{Result, RowError};
use crate::layout::InputLayout;
use crate::options::NormalizationOptions;
use crate::report::NormalizationReport;

const FILL_VALUE: &str = "0";

/// Cleaned records plus the column layout they are written with.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDataset {
    pub columns: Vec<OutputColumn>,
    pub records: Vec<MovieRecord>,
}

/// Result of a normalization batch.
#[derive(Debug, Clone)]
pub struct NormalizationOutcome {
    pub dataset: NormalizedDataset,
    pub report: NormalizationReport,
}

/// Input positions of the recognized columns.
struct FieldSources {
    title: Option<usize>,
    budget: Option<usize>,
    revenue: Option<usize>,
    release_date: Option<usize>,
    collection: Option<usize>,
    countries: Option<usize>,
    companies: Option<usize>,
    extra: Vec<usize>,
}

impl FieldSources {
    fn from_layout(layout: &InputLayout) -> Self {
        Self {
            title: layout.source_of(ColumnKind::Title),
            budget: layout.source_of(ColumnKind::Budget),
            revenue: layout.source_of(ColumnKind::Revenue),
            release_date: layout.source_of(ColumnKind::ReleaseDate),
            collection: layout.source_of(ColumnKind::Collection),
            countries: layout.source_of(ColumnKind::ProductionCountries),
            companies: layout.source_of(ColumnKind::ProductionCompanies),
            extra: layout.extra_sources(),
        }
    }
}

/// Raw cell text, untouched.
fn raw_cell(row: &[String], idx: Option<usize>) -> &str {
    idx.and_then(|idx| row.get(idx))
        .map(String::as_str)
        .unwrap_or("")
}

/// Cell text without surrounding whitespace.
fn cell(row: &[String], idx: Option<usize>) -> &str {
    raw_cell(row, idx).trim()
}

fn filled(value: &str) -> &str {
    if value.is_empty() { FILL_VALUE } else { value }
}

fn named_list(row: &[String], idx: Option<usize>, column: &str) -> std::result::Result<Vec<NamedRef>, RowError> {
    parse_named_list(cell(row, idx)).map_err(|source| RowError::MalformedNested {
        column: column.to_string(),
        source,
    })
}

/// Batch normalizer for raw movie tables.
#[derive(Debug, Clone, Default)]
pub struct RecordNormalizer {
    options: NormalizationOptions,
}

impl RecordNormalizer {
    pub fn new(options: NormalizationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizationOptions {
        &self.options
    }

    /// Normalize a whole table.
    ///
    /// Row-level failures are absorbed into the report. The batch only fails
    /// when the table lacks a required column (`release_date`, `budget`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::NormalizationError::Ingest`] for structural problems.
    pub fn normalize(&self, table: &CsvTable) -> Result<NormalizationOutcome> {
        let source = table.source.display().to_string();
        let span = info_span!("normalize", source = %source);
        let _guard = span.enter();
        let start = Instant::now();

        let layout = InputLayout::build(table, &self.options)?;
        if !layout.discarded.is_empty() {
            debug!(columns = ?layout.discarded, "discarded non-analytic columns");
        }
        let sources = FieldSources::from_layout(&layout);

        let mut report = NormalizationReport {
            discarded_columns: layout.discarded.clone(),
            ..NormalizationReport::default()
        };
        let mut records = Vec::with_capacity(table.rows.len());
        for (idx, row) in table.rows.iter().enumerate() {
            match normalize_row(row, &sources) {
                Ok(record) => {
                    report.record_kept();
                    records.push(record);
                }
                Err(error) => {
                    debug!(row = idx + 1, reason = %error.reason(), %error, "row dropped");
                    report.record_dropped(error.reason());
                }
            }
        }

        info!(
            input_rows = report.input_rows,
            output_rows = report.output_rows,
            dropped_rows = report.dropped_rows,
            duration_ms = start.elapsed().as_millis(),
            "normalization complete"
        );
        Ok(NormalizationOutcome {
            dataset: NormalizedDataset {
                columns: layout.columns,
                records,
            },
            report,
        })
    }
}

fn normalize_row(row: &[String], sources: &FieldSources) -> std::result::Result<MovieRecord, RowError> {
    let revenue_raw = filled(cell(row, sources.revenue));
    // Budget is checked as written: padding is a non-digit character.
    let budget_raw = filled(raw_cell(row, sources.budget));

    let date_raw = cell(row, sources.release_date);
    if date_raw.is_empty() {
        return Err(RowError::MissingReleaseDate);
    }
    let release_date =
        parse_release_date(date_raw).ok_or_else(|| RowError::InvalidReleaseDate {
            value: date_raw.to_string(),
        })?;
    let year = release_date.year();
    let release_year =
        i16::try_from(year).map_err(|_| RowError::YearOutOfRange { year })?;

    if !is_digit_string(budget_raw) {
        return Err(RowError::NonNumericBudget {
            value: budget_raw.to_string(),
        });
    }
    let budget = budget_raw
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(RowError::BudgetOutOfRange {
            digits: budget_raw.len(),
        })?;
    let revenue = parse_f64(revenue_raw).ok_or_else(|| RowError::InvalidRevenue {
        value: revenue_raw.to_string(),
    })?;

    let collection = parse_named_ref(cell(row, sources.collection)).map_err(|source| {
        RowError::MalformedNested {
            column: "belongs_to_collection".to_string(),
            source,
        }
    })?;
    let production_countries = named_list(row, sources.countries, "production_countries")?;
    let production_companies = named_list(row, sources.companies, "production_companies")?;

    Ok(MovieRecord {
        title: cell(row, sources.title).to_string(),
        budget,
        revenue,
        release_date,
        release_year,
        return_ratio: MovieRecord::compute_return(revenue, budget),
        collection,
        production_countries,
        production_companies,
        extra: sources
            .extra
            .iter()
            .map(|&idx| cell(row, Some(idx)).to_string())
            .collect(),
    })
}

/// Read and normalize a CSV file in one step.
///
/// # Errors
///
/// Fails when the file cannot be read or lacks a required column.
pub fn normalize_file(path: &Path, options: &NormalizationOptions) -> Result<NormalizationOutcome> {
    let table = read_csv_table(path)?;
    RecordNormalizer::new(options.clone()).normalize(&table)
}
