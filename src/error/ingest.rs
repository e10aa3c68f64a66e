use thiserror::Error;

/// Errors raised while deriving records from upstream data.
///
/// Malformed upstream records are skipped rather than reported through this type; these
/// variants cover inputs the pipeline cannot proceed without.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// Identity derivation was called without any key parts.
    #[error("Cannot derive a stable identity from empty input")]
    EmptyIdentity,
    /// A wall-clock time string could not be parsed.
    #[error("Invalid wall-clock time {0:?}, expected HH:MM or HH:MM:SS")]
    InvalidTime(String),
    /// A calendar date string could not be parsed.
    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}
