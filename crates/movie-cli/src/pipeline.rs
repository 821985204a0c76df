//! Pipeline stages shared by the CLI commands.
//!
//! The library crates open their own spans and log per-stage timings; these
//! wrappers attach the path being processed to any error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use movie_model::{
    CompanyStats, CountryCount, FranchiseStats, MonthCount, TitleReturn, WeekdayCount,
};
use movie_normalization::{NormalizationOptions, NormalizationOutcome, normalize_file};
use movie_output::write_artifact;
use movie_query::QueryEngine;
use movie_store::DatasetStore;

/// File name used when no output path is given.
pub const DEFAULT_ARTIFACT_NAME: &str = "cleaned_dataset.csv";

/// Default artifact location: next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    input
        .parent()
        .map_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_NAME), |dir| {
            dir.join(DEFAULT_ARTIFACT_NAME)
        })
}

/// Apply `--drop-column` and `--keep-column` on top of the default drop list.
///
/// Kept columns win over dropped ones when a name appears in both.
pub fn build_options(drop_columns: &[String], keep_columns: &[String]) -> NormalizationOptions {
    let options = drop_columns
        .iter()
        .fold(NormalizationOptions::default(), |options, column| {
            options.with_drop_column(column.as_str())
        });
    keep_columns
        .iter()
        .fold(options, |options, column| options.with_kept_column(column))
}

/// Stage 1: read and clean the raw CSV.
pub fn normalize(input: &Path, options: &NormalizationOptions) -> Result<NormalizationOutcome> {
    normalize_file(input, options).with_context(|| format!("normalize {}", input.display()))
}

/// Stage 2: publish the cleaned dataset, unless this is a dry run.
///
/// Returns the path written, or `None` for a dry run.
pub fn publish(
    outcome: &NormalizationOutcome,
    output: &Path,
    dry_run: bool,
) -> Result<Option<PathBuf>> {
    if dry_run {
        info!(output = %output.display(), "dry run, artifact not written");
        return Ok(None);
    }
    write_artifact(&outcome.dataset, output)
        .with_context(|| format!("write {}", output.display()))?;
    Ok(Some(output.to_path_buf()))
}

/// Stage 3: load a published artifact into a query engine.
pub fn open_engine(dataset: &Path) -> Result<QueryEngine> {
    let store = DatasetStore::open_artifact(dataset)
        .with_context(|| format!("load dataset {}", dataset.display()))?;
    Ok(QueryEngine::new(store))
}

/// One analytic query and its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    Month(String),
    Weekday(String),
    Franchise(String),
    Country(String),
    Company(String),
    Return(String),
}

/// Result of a [`QueryRequest`], serialized as the bare result object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Month(MonthCount),
    Weekday(WeekdayCount),
    Franchise(FranchiseStats),
    Country(CountryCount),
    Company(CompanyStats),
    Return(TitleReturn),
}

/// Stage 4: answer a query.
///
/// Only a title lookup with no match fails.
pub fn run_query(engine: &QueryEngine, request: &QueryRequest) -> Result<QueryOutput> {
    let output = match request {
        QueryRequest::Month(month) => QueryOutput::Month(engine.count_by_month(month)),
        QueryRequest::Weekday(weekday) => QueryOutput::Weekday(engine.count_by_weekday(weekday)),
        QueryRequest::Franchise(name) => QueryOutput::Franchise(engine.franchise_stats(name)),
        QueryRequest::Country(name) => QueryOutput::Country(engine.count_by_country(name)),
        QueryRequest::Company(name) => QueryOutput::Company(engine.company_stats(name)),
        QueryRequest::Return(title) => QueryOutput::Return(engine.title_return(title)?),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("data/movies.csv")),
            PathBuf::from("data/cleaned_dataset.csv")
        );
    }

    #[test]
    fn keep_overrides_drop() {
        let options = build_options(
            &["overview".to_string(), "homepage".to_string()],
            &["homepage".to_string()],
        );
        assert!(options.drops("overview"));
        assert!(options.drops("adult"));
        assert!(!options.drops("homepage"));
    }
}
