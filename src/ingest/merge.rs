use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, NaiveTime};

use crate::{
    error::ingest::IngestError,
    ingest::room::{family_of, space_key, RoomMode, ROOM_FAMILIES},
    model::event::Event,
    util::identity::stable_id,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MergeKey {
    family: usize,
    date: NaiveDate,
    event_name: String,
    start_time: NaiveTime,
}

/// Collapses both halves of a divisible room booked for the same meeting into one event in
/// the combined room.
///
/// Halves pair up when they share date, event name and start time. The merged event keeps the
/// first half's series and reservation, carries the combined room label (and an id derived
/// from it), unions both halves' resources (summing quantities of lines with the same name) and ends at the later of the two end times. A half
/// without a partner passes through unchanged.
///
/// # Returns
/// - `(events, merged)` - Events in input order, merged events taking the earlier half's
///   position, and the number of pairs merged
pub fn merge_room_pairs(events: Vec<Event>) -> Result<(Vec<Event>, usize), IngestError> {
    let mut halves: HashMap<MergeKey, [Vec<usize>; 2]> = HashMap::new();

    for (index, event) in events.iter().enumerate() {
        if let Some((family, RoomMode::Split(half))) = family_of(&event.room_name) {
            let key = MergeKey {
                family,
                date: event.date,
                event_name: event.event_name.clone(),
                start_time: event.start_time,
            };
            halves.entry(key).or_default()[half].push(index);
        }
    }

    let mut consumed = HashSet::new();
    let mut merged_at: HashMap<usize, Event> = HashMap::new();

    for (key, [first_halves, second_halves]) in &halves {
        for (&first, &second) in first_halves.iter().zip(second_halves.iter()) {
            let merged = combine(&events[first], &events[second], ROOM_FAMILIES[key.family].combined)?;
            consumed.insert(first);
            consumed.insert(second);
            merged_at.insert(first.min(second), merged);
        }
    }

    let merged_count = merged_at.len();
    let mut output = Vec::with_capacity(events.len() - merged_count);
    for (index, event) in events.into_iter().enumerate() {
        if let Some(merged) = merged_at.remove(&index) {
            output.push(merged);
        } else if !consumed.contains(&index) {
            output.push(event);
        }
    }

    Ok((output, merged_count))
}

fn combine(first: &Event, second: &Event, combined_room: &str) -> Result<Event, IngestError> {
    let id = stable_id(&[
        first.series_id.to_string(),
        first.reservation_id.to_string(),
        space_key(combined_room),
    ])?;

    let mut resources = first.resources.clone();
    for resource in &second.resources {
        match resources
            .iter_mut()
            .find(|r| r.item_name == resource.item_name)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(resource.quantity);
                if existing.instruction.is_none() {
                    existing.instruction = resource.instruction.clone();
                }
            }
            None => resources.push(resource.clone()),
        }
    }

    Ok(Event {
        id,
        room_name: combined_room.to_string(),
        venue_id: None,
        end_time: first.end_time.max(second.end_time),
        resources,
        transform: None,
        ..first.clone()
    })
}
