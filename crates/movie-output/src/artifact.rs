//! Artifact rendering and atomic publish.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use csv::WriterBuilder;
use tracing::{info, info_span};

use movie_common::format_numeric;
use movie_model::{ColumnKind, MovieRecord};
use movie_normalization::NormalizedDataset;
use movie_normalization::date::OUTPUT_DATE_FORMAT;

use crate::error::{OutputError, Result};

fn render_cell(record: &MovieRecord, kind: ColumnKind) -> Result<String> {
    let value = match kind {
        ColumnKind::Title => record.title.clone(),
        ColumnKind::Budget => format_numeric(record.budget),
        ColumnKind::Revenue => format_numeric(record.revenue),
        ColumnKind::ReleaseDate => record.release_date.format(OUTPUT_DATE_FORMAT).to_string(),
        ColumnKind::ReleaseYear => record.release_year.to_string(),
        ColumnKind::Return => format_numeric(record.return_ratio),
        ColumnKind::Collection => match &record.collection {
            Some(collection) => serde_json::to_string(collection)?,
            None => String::new(),
        },
        ColumnKind::ProductionCountries => serde_json::to_string(&record.production_countries)?,
        ColumnKind::ProductionCompanies => serde_json::to_string(&record.production_companies)?,
        ColumnKind::Extra(slot) => record.extra.get(slot).cloned().unwrap_or_default(),
    };
    Ok(value)
}

/// Render the dataset as CSV bytes: header row, then one row per record.
///
/// # Errors
///
/// Fails only if a cell cannot be encoded.
pub fn render_artifact(dataset: &NormalizedDataset) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(dataset.columns.iter().map(|column| column.name.as_str()))?;
    for record in &dataset.records {
        let row = dataset
            .columns
            .iter()
            .map(|column| render_cell(record, column.kind))
            .collect::<Result<Vec<_>>>()?;
        writer.write_record(&row)?;
    }
    writer
        .into_inner()
        .map_err(|error| OutputError::Csv(error.into_error().into()))
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn io_error(operation: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> OutputError {
    let path = path.to_path_buf();
    move |source| OutputError::Io {
        operation,
        path,
        source,
    }
}

fn write_staged(temp_path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(io_error("create", temp_path))?;
    file.write_all(bytes).map_err(io_error("write", temp_path))?;
    file.sync_all().map_err(io_error("sync", temp_path))?;
    Ok(())
}

/// Write the dataset to `path`.
///
/// Uses atomic write (temp file + rename); on any failure the temp file is
/// removed and an existing artifact at `path` is left untouched.
///
/// # Errors
///
/// Returns an error if the directory, temp file or final rename fails.
pub fn write_artifact(dataset: &NormalizedDataset, path: &Path) -> Result<()> {
    let span = info_span!("write_artifact", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let bytes = render_artifact(dataset)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error("create directory", parent))?;
    }

    let temp_path = staging_path(path);
    if let Err(error) = write_staged(&temp_path, &bytes) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(OutputError::AtomicWriteFailed {
            temp_path,
            target_path: path.to_path_buf(),
            source,
        });
    }

    info!(
        records = dataset.records.len(),
        bytes = bytes.len(),
        duration_ms = start.elapsed().as_millis(),
        "artifact published"
    );
    Ok(())
}
