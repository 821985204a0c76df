//! Analytic queries over a [`movie_store::DatasetStore`].
//!
//! Count and aggregate queries never fail: an unknown key yields a zero-valued
//! result. Only the single-title lookup reports a missing match as an error.

mod engine;
mod error;

pub use engine::QueryEngine;
pub use error::{QueryError, Result};
