//! Crate-wide error types.
//!
//! Record operations report *why* they refused a change through
//! [`SongError`], a plain reason code with no side effects. The top-level
//! [`Error`] wraps those reasons with the kind of operation that failed and
//! also covers configuration and logging setup.
//!
//! # Design
//!
//! - [`SongError`]: field-level reason codes returned by [`crate::model::Song`]
//! - [`Error`]: top-level error for callers using `?`
//! - [`crate::config::ConfigError`]: config file save failures

use crate::config::ConfigError;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a record operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SongError {
    /// Title was empty after trimming
    #[error("title must not be empty")]
    EmptyTitle,

    /// Artist was empty after trimming
    #[error("artist must not be empty")]
    EmptyArtist,

    /// Duration was zero or negative
    #[error("duration must be a positive number of seconds, got {0}")]
    NonPositiveDuration(i64),

    /// Rating outside 1..=5
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),

    /// Tag was empty after trimming
    #[error("tag must not be empty")]
    EmptyTag,

    /// Tag already present (ignoring case)
    #[error("tag '{0}' already exists (ignoring case)")]
    DuplicateTag(String),

    /// No tag matched (ignoring case)
    #[error("tag '{0}' not found")]
    TagNotFound(String),

    /// The id counter has no ids left to hand out
    #[error("no record ids left to assign")]
    IdsExhausted,
}

impl SongError {
    /// Name of the field the failure concerns.
    pub fn field(&self) -> &'static str {
        match self {
            SongError::EmptyTitle => "title",
            SongError::EmptyArtist => "artist",
            SongError::NonPositiveDuration(_) => "duration",
            SongError::RatingOutOfRange(_) => "rating",
            SongError::EmptyTag | SongError::DuplicateTag(_) | SongError::TagNotFound(_) => "tags",
            SongError::IdsExhausted => "id",
        }
    }
}

/// Top-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The record never became usable
    #[error("song record is invalid: {0}")]
    ConstructionInvalid(#[source] SongError),

    /// A single mutation had no effect
    #[error("{operation} rejected: {source}")]
    MutationRejected {
        operation: &'static str,
        #[source]
        source: SongError,
    },

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),
}

impl Error {
    /// Create a mutation rejection for the named operation.
    pub fn rejected(operation: &'static str, source: SongError) -> Self {
        Self::MutationRejected { operation, source }
    }

    /// Create a logging error.
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }

    /// The underlying reason code, if this error came from a record.
    pub fn reason(&self) -> Option<&SongError> {
        match self {
            Error::ConstructionInvalid(e) => Some(e),
            Error::MutationRejected { source, .. } => Some(source),
            _ => None,
        }
    }
}
