//! Rules engine: tables of boolean-gated emissions turning enriched events into actions, and
//! actions into QC checklist items.

pub mod action;
pub mod config;
pub mod qc;
