//! Error types for the ingestion pipeline.
//!
//! Domain-specific errors live in their own submodules and are aggregated into [`Error`],
//! which also wraps the external library errors so `?` works across service boundaries.

pub mod config;
pub mod ingest;

use thiserror::Error;

use crate::error::{config::ConfigError, ingest::IngestError};

/// Main error type for the ingestion pipeline.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Ingestion errors (identity derivation, wall-clock time arithmetic)
/// - External library errors (database, filesystem, JSON, scheduler)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Error deriving records from upstream data.
    #[error(transparent)]
    IngestError(#[from] IngestError),
    /// Internal error indicating a bug in the pipeline.
    #[error("Internal error in the ingestion pipeline, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failure reading the raw feed.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// The raw feed is not a JSON array.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}
