use chrono::{NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::{
    error::ingest::IngestError,
    ingest::room::{canonical_room_name, space_key},
    model::{
        event::{Event, EventType, Resource},
        raw::{OneOrMany, RawReservation, RawResource, RawSeries},
    },
    util::{identity::stable_id, time::parse_wall_datetime},
};

/// Events produced from one raw series plus the number of reservations/spaces skipped.
#[derive(Debug, Default)]
pub struct Exploded {
    pub events: Vec<Event>,
    pub skipped: usize,
}

/// Explodes a series into one event per (reservation, space) pair.
///
/// Reservations without a resolvable id, start or end are skipped and logged, as are spaces
/// without a usable name. A reservation without spaces falls back to the series subject.
/// Venue ids, series positions and transform markers are filled in by later steps.
pub fn explode_series(series: RawSeries) -> Result<Exploded, IngestError> {
    let mut exploded = Exploded::default();

    let Some(series_id) = series.item_id.as_i64() else {
        exploded.skipped += series.reservation_count();
        return Ok(exploded);
    };
    let event_type = EventType::from_upstream(series.type_name.as_deref().unwrap_or_default());
    let event_name = series.item_name.trim().to_string();

    for reservation in series.reservations.map(OneOrMany::into_vec).unwrap_or_default() {
        let Some(slot) = resolve_slot(series_id, &reservation) else {
            exploded.skipped += 1;
            continue;
        };

        let resources = reservation
            .resources
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .filter_map(to_resource)
            .collect::<Vec<_>>();

        let mut rooms: Vec<String> = reservation
            .spaces
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .map(|space| space.space_name.or(space.formal_name))
            .filter_map(|name| {
                let name = name.filter(|name| !name.trim().is_empty());
                if name.is_none() {
                    warn!(
                        series_id = series_id,
                        reservation_id = slot.reservation_id,
                        "Reservation space has no name; skipping space"
                    );
                    exploded.skipped += 1;
                }
                name
            })
            .collect();
        if rooms.is_empty() {
            if let Some(subject) = series.subject.as_deref().filter(|s| !s.trim().is_empty()) {
                rooms.push(subject.to_string());
            }
        }

        for raw_room in rooms {
            let room_name = canonical_room_name(&raw_room);
            let id = stable_id(&[
                series_id.to_string(),
                slot.reservation_id.to_string(),
                space_key(&room_name),
            ])?;

            exploded.events.push(Event {
                id,
                series_id,
                reservation_id: slot.reservation_id,
                date: slot.start.date(),
                start_time: slot.start.time(),
                end_time: slot.end_time,
                event_name: event_name.clone(),
                event_type: event_type.clone(),
                room_name,
                venue_id: None,
                resources: resources.clone(),
                series_position: None,
                transform: None,
            });
        }
    }

    Ok(exploded)
}

struct Slot {
    reservation_id: i64,
    start: NaiveDateTime,
    end_time: NaiveTime,
}

fn resolve_slot(series_id: i64, reservation: &RawReservation) -> Option<Slot> {
    let reservation_id = reservation.reservation_id.as_ref().and_then(|id| id.as_i64());
    let start = reservation
        .reservation_start_dt
        .as_deref()
        .and_then(|value| parse_wall_datetime(value).ok());
    let end = reservation
        .reservation_end_dt
        .as_deref()
        .and_then(|value| parse_wall_datetime(value).ok());

    match (reservation_id, start, end) {
        (Some(reservation_id), Some(start), Some(end)) => {
            // Bookings running past midnight are cut at the end of their start day.
            let end_time = if end.date() > start.date() {
                NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(end.time())
            } else {
                end.time()
            };

            Some(Slot {
                reservation_id,
                start,
                end_time,
            })
        }
        _ => {
            warn!(
                series_id = series_id,
                reservation_id = ?reservation_id,
                start = ?reservation.reservation_start_dt,
                end = ?reservation.reservation_end_dt,
                "Reservation is missing an id, start or end; skipping reservation"
            );
            None
        }
    }
}

fn to_resource(raw: RawResource) -> Option<Resource> {
    let item_name = raw.resource_name.trim().to_string();
    if item_name.is_empty() {
        return None;
    }

    let quantity = raw
        .quantity
        .and_then(|quantity| quantity.as_i64())
        .map(|quantity| quantity.clamp(0, i64::from(i32::MAX)) as i32)
        .unwrap_or(1);
    let instruction = raw
        .instructions
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    Some(Resource {
        item_name,
        quantity,
        instruction,
    })
}
