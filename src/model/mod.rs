//! Domain models passed between pipeline stages.

pub mod action;
pub mod enrichment;
pub mod event;
pub mod qc;
pub mod raw;
pub mod report;
