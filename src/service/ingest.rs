use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::{
    data::venue::VenueRepository,
    enrich::enrich,
    error::Error,
    ingest::{normalize, venue::VenueDirectory, NormalizeOutput},
    model::report::IngestReport,
    rules::action::derive_actions,
    service::{
        feed::RawFeed,
        reconcile::{Reconciler, RunSet},
    },
};

pub struct IngestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngestService<'a> {
    /// Creates a new instance of [`IngestService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the raw feed and runs the pipeline for `date`.
    pub async fn run_feed<F: RawFeed + Sync>(
        &self,
        feed: &F,
        date: NaiveDate,
        protected: &HashSet<i64>,
        now: NaiveDateTime,
    ) -> Result<IngestReport, Error> {
        let raw = feed.load().await?;

        self.run(raw, date, protected, now).await
    }

    /// Normalizes, derives and reconciles one target date inside a single transaction.
    ///
    /// # Arguments
    /// - `raw`: Raw upstream series records
    /// - `date`: Target date; only its events are persisted
    /// - `protected`: Stored event ids to keep even if upstream no longer lists them
    /// - `now`: Local wall-clock time used to protect events that already started
    ///
    /// # Returns
    /// - `Ok(IngestReport)` - Counters of what the run changed
    /// - `Err(Error)` - Derivation or persistence failed; nothing was committed
    pub async fn run(
        &self,
        raw: Vec<serde_json::Value>,
        date: NaiveDate,
        protected: &HashSet<i64>,
        now: NaiveDateTime,
    ) -> Result<IngestReport, Error> {
        let txn = self.db.begin().await?;

        let venues = VenueDirectory::from(VenueRepository::new(&txn).all().await?);
        let normalized = normalize(raw, &venues)?;
        let skipped = normalized.skipped;
        let run = derive_run_set(normalized, date)?;

        let mut report = Reconciler::new(&txn)
            .reconcile(&run, protected, now)
            .await?;
        txn.commit().await?;

        report.skipped_records = skipped;
        info!(date = %date, "Ingestion complete: {}", report);

        Ok(report)
    }
}

/// Narrows normalized output to one date and derives its sub-records and actions.
///
/// Only series with at least one event on the date are kept.
pub fn derive_run_set(normalized: NormalizeOutput, date: NaiveDate) -> Result<RunSet, Error> {
    let mut events = Vec::new();
    let mut actions = Vec::new();

    for event in normalized.events.into_iter().filter(|e| e.date == date) {
        let enriched = enrich(event)?;
        actions.extend(derive_actions(&enriched)?);
        events.push(enriched);
    }

    let series_ids: HashSet<i64> = events.iter().map(|e| e.event.series_id).collect();
    let series = normalized
        .series
        .into_iter()
        .filter(|series| series_ids.contains(&series.id))
        .collect();

    Ok(RunSet {
        date,
        series,
        events,
        actions,
    })
}
