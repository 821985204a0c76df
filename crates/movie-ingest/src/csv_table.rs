use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A header row plus string cells, every row padded to the header width.
///
/// Header names are trimmed; data cells are kept exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    /// Where the table was read from, used in diagnostics.
    pub source: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new(source: impl Into<PathBuf>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            source: source.into(),
            headers,
            rows,
        }
    }

    /// Position of a column, matched ASCII case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Position of a column that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::MissingColumn`] when the header row lacks `name`.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                path: self.source.clone(),
            })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Read a CSV file whose first non-blank row is the header.
///
/// # Errors
///
/// Fails when the file is missing or unreadable, when the CSV is malformed,
/// or when it contains no header row.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_csv_table(file, path)
}

/// Parse CSV content from any reader; `source` only labels diagnostics.
///
/// # Errors
///
/// Same as [`read_csv_table`], minus the file-open failures.
pub fn parse_csv_table<R: Read>(reader: R, source: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut skipped_blank = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            skipped_blank += 1;
            continue;
        }
        let Some(width) = headers.as_ref().map(Vec::len) else {
            headers = Some(record.iter().map(normalize_header).collect());
            continue;
        };
        let mut row = Vec::with_capacity(width);
        for idx in 0..width {
            row.push(record.get(idx).map(str::to_string).unwrap_or_default());
        }
        rows.push(row);
    }
    let headers = headers.ok_or_else(|| IngestError::EmptyCsv {
        path: source.to_path_buf(),
    })?;
    debug!(
        source = %source.display(),
        columns = headers.len(),
        rows = rows.len(),
        skipped_blank,
        "csv table read"
    );
    Ok(CsvTable::new(source, headers, rows))
}
