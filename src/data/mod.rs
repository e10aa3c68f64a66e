//! Data access layer repositories.
//!
//! Every repository is generic over [`sea_orm::ConnectionTrait`] so the pipeline can run it
//! on a plain connection or inside the reconciliation transaction. Bulk writes are chunked
//! to stay under backend bind-parameter limits.

pub mod action;
pub mod av_config;
pub mod event;
pub mod event_resource;
pub mod hybrid;
pub mod other_hardware;
pub mod qc_item;
pub mod recording;
pub mod series;
pub mod venue;


/// Maximum rows per bulk statement.
pub(crate) const BATCH_SIZE: usize = 500;
