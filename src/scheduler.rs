//! Resident mode: runs the pipeline for the current day on a cron schedule.

use std::{collections::HashSet, path::PathBuf};

use chrono::Local;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::service::{feed::JsonFileFeed, ingest::IngestService};

/// Initialize and start the cron job scheduler
///
/// # Arguments
/// - `cron`: Six-field cron expression (seconds first), e.g. `0 */15 6-22 * * *`
/// - `raw_feed_path`: Feed file re-read on every run
///
/// # Notes
/// - Overlapping runs for the same date are not guarded against here; pick an expression
///   whose interval exceeds a run's duration
pub async fn start_scheduler(
    db: &DatabaseConnection,
    cron: &str,
    raw_feed_path: PathBuf,
) -> Result<JobScheduler, JobSchedulerError> {
    let sched = JobScheduler::new().await?;
    let db = db.clone();

    sched
        .add(Job::new_async(cron, move |_, _| {
            let db = db.clone();
            let feed = JsonFileFeed::new(raw_feed_path.clone());

            Box::pin(async move {
                let now = Local::now().naive_local();
                let result = IngestService::new(&db)
                    .run_feed(&feed, now.date(), &HashSet::new(), now)
                    .await;

                match result {
                    Ok(report) => tracing::info!("Scheduled ingestion finished: {}", report),
                    Err(e) => tracing::error!("Scheduled ingestion failed: {:?}", e),
                }
            })
        })?)
        .await?;

    sched.start().await?;
    tracing::info!(cron = cron, "Ingestion scheduler started");

    Ok(sched)
}
