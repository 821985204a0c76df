use thiserror::Error;

/// Errors surfaced to query callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No record has the requested title.
    #[error("no movie titled '{title}'")]
    NotFound { title: String },
}

pub type Result<T> = std::result::Result<T, QueryError>;
