//! Business policy constants used by enrichment and the rules engine.

/// Setup and session-setup actions start this long before the event.
pub const SETUP_LEAD_SECS: i64 = 450;

/// One capture-QC check is scheduled per whole interval of event duration.
pub const CAPTURE_QC_INTERVAL_SECS: i64 = 1_800;

/// Operational ceiling on handheld microphones per event.
pub const MAX_HANDHELD_MICS: i32 = 2;

/// Operational ceiling on lapel microphones per event.
pub const MAX_LAPEL_MICS: i32 = 2;

/// Every room carries one lapel microphone even when none is requested.
pub const DEFAULT_LAPEL_MICS: i32 = 1;
