use std::{collections::HashSet, process::ExitCode};

use chrono::{Local, NaiveDate};
use clap::Parser;
use opsboard::{
    config::Config,
    error::Error,
    scheduler::start_scheduler,
    service::{feed::JsonFileFeed, ingest::IngestService},
    startup,
    util::time::parse_date,
};
use tracing_subscriber::EnvFilter;

/// Ingest room bookings for one date and reconcile operations work items.
#[derive(Parser, Debug)]
#[command(name = "opsboard", version, about)]
struct Cli {
    /// Target date (YYYY-MM-DD); defaults to today. When INGEST_CRON is set and no date is
    /// given, the process stays resident and ingests today on that schedule.
    #[arg(value_parser = parse_date)]
    date: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    if let (Some(cron), None) = (config.ingest_cron.as_deref(), cli.date) {
        let mut sched = start_scheduler(&db, cron, config.raw_feed_path.clone()).await?;
        tokio::signal::ctrl_c().await?;
        tracing::info!("Shutting down ingestion scheduler...");
        sched.shutdown().await?;

        return Ok(());
    }

    let now = Local::now().naive_local();
    let date = cli.date.unwrap_or(now.date());
    let feed = JsonFileFeed::new(&config.raw_feed_path);

    IngestService::new(&db)
        .run_feed(&feed, date, &HashSet::new(), now)
        .await?;

    Ok(())
}
