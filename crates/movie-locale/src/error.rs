use thiserror::Error;

/// Errors raised by the label tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The name is not an English month or weekday name.
    #[error("unknown calendar label: {name}")]
    UnknownLabel { name: String },
}

pub type Result<T> = std::result::Result<T, LocaleError>;
