use movie_locale::LocaleError;
use movie_normalization::NormalizationError;
use thiserror::Error;

/// Errors raised while building a snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A release date produced a name outside the calendar vocabulary.
    #[error("record {index}: {source}")]
    Locale {
        index: usize,
        #[source]
        source: LocaleError,
    },

    /// The artifact could not be read back.
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
