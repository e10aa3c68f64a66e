use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{NaiveDate, NaiveTime};

use crate::model::event::{Event, SeriesSummary};

/// Aggregates series attributes from every event exploded out of the payload.
///
/// Name and type come from the series' first event in input order. Output is ordered by
/// series id.
pub fn summarize_series(events: &[Event]) -> Vec<SeriesSummary> {
    let mut summaries: BTreeMap<i64, SeriesSummary> = BTreeMap::new();

    for event in events {
        summaries
            .entry(event.series_id)
            .and_modify(|summary| {
                summary.total_events += 1;
                summary.first_date = summary.first_date.min(event.date);
                summary.last_date = summary.last_date.max(event.date);
            })
            .or_insert_with(|| SeriesSummary {
                id: event.series_id,
                name: event.event_name.clone(),
                event_type: event.event_type.clone(),
                total_events: 1,
                first_date: event.date,
                last_date: event.date,
            });
    }

    summaries.into_values().collect()
}

/// Sets each event's 1-based position among the distinct meeting slots of its series.
///
/// Events of the same series sharing date and start time (e.g. one meeting booked in two
/// rooms) share a position.
pub fn assign_series_positions(events: &mut [Event]) {
    let mut slots: HashMap<i64, BTreeSet<(NaiveDate, NaiveTime)>> = HashMap::new();
    for event in events.iter() {
        slots
            .entry(event.series_id)
            .or_default()
            .insert((event.date, event.start_time));
    }

    for event in events.iter_mut() {
        event.series_position = slots.get(&event.series_id).and_then(|slots| {
            slots
                .iter()
                .position(|slot| *slot == (event.date, event.start_time))
                .and_then(|index| i32::try_from(index + 1).ok())
        });
    }
}
