//! Test fixture modules for database rows and raw upstream payloads.
//!
//! - `ingest` - Venues, series, events and actions, plus raw payload factories

pub mod ingest;
