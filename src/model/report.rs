use std::fmt;

/// Counters describing what one pipeline run changed in storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub skipped_records: usize,
    pub series_upserted: usize,
    pub events_upserted: usize,
    pub events_deleted: u64,
    pub actions_inserted: usize,
    pub actions_deleted: u64,
    pub qc_items_inserted: u64,
    pub qc_items_deleted: u64,
}

impl IngestReport {
    /// True when the run neither inserted new work items nor deleted anything.
    pub fn is_steady_state(&self) -> bool {
        self.events_deleted == 0
            && self.actions_inserted == 0
            && self.actions_deleted == 0
            && self.qc_items_inserted == 0
            && self.qc_items_deleted == 0
    }
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} series, {} events upserted ({} deleted), {} actions inserted ({} deleted), \
             {} QC items inserted ({} deleted), {} records skipped",
            self.series_upserted,
            self.events_upserted,
            self.events_deleted,
            self.actions_inserted,
            self.actions_deleted,
            self.qc_items_inserted,
            self.qc_items_deleted,
            self.skipped_records
        )
    }
}
