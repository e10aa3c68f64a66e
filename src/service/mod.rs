//! Services orchestrating the pipeline stages against storage.

pub mod feed;
pub mod ingest;
pub mod reconcile;
