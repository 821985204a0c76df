use std::path::PathBuf;

use serde::Serialize;

use movie_normalization::NormalizationReport;

/// Outcome of `movies normalize`, printed as a table or JSON.
#[derive(Debug, Serialize)]
pub struct NormalizeResult {
    pub input: PathBuf,
    /// Published artifact, `None` for a dry run.
    pub output: Option<PathBuf>,
    pub report: NormalizationReport,
}
