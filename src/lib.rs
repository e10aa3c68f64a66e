//! Room-booking ingestion and reconciliation for the operations dashboard.
//!
//! Raw availability items scraped from the facility-scheduling service are normalized into
//! events, enriched from their resource lines, expanded into operator actions and QC checklist
//! items by a rules engine, and reconciled against storage so repeated runs converge without
//! touching operator-entered state.

pub mod config;
pub mod data;
pub mod enrich;
pub mod error;
pub mod ingest;
pub mod model;
pub mod rules;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
