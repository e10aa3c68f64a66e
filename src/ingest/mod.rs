//! Record normalizer: raw upstream series to canonical [`Event`]s.
//!
//! Stages run in a fixed order: parse, series dedup, series filter, explode into events,
//! event-id dedup, merge of divisible-room halves (followed by a second id dedup), venue
//! resolution, transform markers and series positions.

pub mod dedupe;
pub mod explode;
pub mod filter;
pub mod merge;
pub mod room;
pub mod series;
pub mod transform;
pub mod venue;

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::{
    error::ingest::IngestError,
    ingest::{
        dedupe::dedupe_series,
        explode::explode_series,
        filter::{check_series, Rejection},
        merge::merge_room_pairs,
        series::{assign_series_positions, summarize_series},
        transform::assign_transforms,
        venue::VenueDirectory,
    },
    model::{
        event::{Event, SeriesSummary},
        raw::RawSeries,
    },
};

/// Canonical events for every date present in the payload, plus their series.
#[derive(Debug, Default)]
pub struct NormalizeOutput {
    pub events: Vec<Event>,
    pub series: Vec<SeriesSummary>,
    /// Records dropped along the way: malformed, duplicate, private or invalid.
    pub skipped: usize,
}

/// Normalizes a raw upstream payload.
///
/// Individual malformed records are skipped and counted; only failures that make derivation
/// impossible (such as an empty identity) abort.
pub fn normalize(
    raw: Vec<serde_json::Value>,
    venues: &VenueDirectory,
) -> Result<NormalizeOutput, IngestError> {
    let mut skipped = 0;

    let mut parsed = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<RawSeries>(value) {
            Ok(series) => parsed.push(series),
            Err(err) => {
                warn!(index = index, error = %err, "Skipping malformed upstream series");
                skipped += 1;
            }
        }
    }

    let (parsed, discarded) = dedupe_series(parsed);
    skipped += discarded;

    let mut events = Vec::new();
    for series in parsed {
        if let Err(rejection) = check_series(&series) {
            log_rejection(&series, rejection);
            skipped += 1;
            continue;
        }

        let exploded = explode_series(series)?;
        skipped += exploded.skipped;
        events.extend(exploded.events);
    }

    skipped += drop_duplicate_ids(&mut events);

    let (mut events, merged) = merge_room_pairs(events)?;
    if merged > 0 {
        debug!(merged = merged, "Merged divisible-room halves");
        // A merged id can collide with a direct booking of the combined room.
        skipped += drop_duplicate_ids(&mut events);
    }

    for event in events.iter_mut() {
        event.venue_id = venues.resolve(&event.room_name);
        if event.venue_id.is_none() {
            debug!(
                event_id = event.id,
                room = %event.room_name,
                "No venue matches room; keeping event without venue"
            );
        }
    }

    assign_transforms(&mut events);
    assign_series_positions(&mut events);
    let series = summarize_series(&events);

    info!(
        events = events.len(),
        series = series.len(),
        skipped = skipped,
        "Normalized upstream payload"
    );

    Ok(NormalizeOutput {
        events,
        series,
        skipped,
    })
}

/// Keeps the first event of every id and logs the rest.
///
/// # Returns
/// - Number of events dropped
fn drop_duplicate_ids(events: &mut Vec<Event>) -> usize {
    let mut seen = HashSet::with_capacity(events.len());
    let before = events.len();

    events.retain(|event| {
        if seen.insert(event.id) {
            return true;
        }
        warn!(
            event_id = event.id,
            series_id = event.series_id,
            reservation_id = event.reservation_id,
            room = %event.room_name,
            "Duplicate event identity; keeping first occurrence"
        );
        false
    });

    before - events.len()
}

fn log_rejection(series: &RawSeries, rejection: Rejection) {
    let series_id = series.item_id.as_i64();
    match rejection {
        Rejection::Private => {
            debug!(series_id = ?series_id, "Skipping private placeholder series")
        }
        Rejection::MissingIdentifier => warn!(
            series_id = ?series_id,
            name = %series.item_name,
            "Skipping series without required identifiers"
        ),
        Rejection::MultiRoomSubject => debug!(
            series_id = ?series_id,
            subject = ?series.subject,
            "Skipping series with multi-room subject"
        ),
    }
}
