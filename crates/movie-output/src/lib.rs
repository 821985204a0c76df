//! Normalized dataset output.
//!
//! The cleaned dataset is published as a CSV artifact. Output is staged in a
//! sibling temp file and renamed into place only after it was fully written,
//! so a failed batch never leaves a partial artifact behind.

mod artifact;
mod error;

pub use artifact::{render_artifact, write_artifact};
pub use error::{OutputError, Result};
