//! Factories for raw upstream payload records.
//!
//! Each factory returns a `serde_json::Value` shaped like the scraping collaborator's output,
//! so tests exercise the same deserialization path as production runs.

use serde_json::{json, Value};

/// Create a raw series-level availability item.
///
/// # Arguments
/// - `item_id` - Outer series identifier
/// - `name` - Event name shared by every occurrence
/// - `reservations` - Reservation objects, see [`raw_reservation`]
///
/// # Returns
/// - `Value` - A public lecture series with a valid secondary identifier
pub fn raw_series(item_id: i64, name: &str, reservations: Vec<Value>) -> Value {
    json!({
        "itemId": item_id,
        "itemId2": item_id + 1,
        "itemName": name,
        "typeName": "Lecture",
        "isPrivate": false,
        "reservation": reservations,
    })
}

/// Create a raw reservation in one room.
///
/// # Arguments
/// - `reservation_id` - Upstream reservation identifier
/// - `room` - Raw space name, canonicalized by the normalizer
/// - `start` / `end` - Local date-times, e.g. `2024-09-03T09:00:00`
/// - `resources` - Resource lines, see [`raw_resource`]
pub fn raw_reservation(
    reservation_id: i64,
    room: &str,
    start: &str,
    end: &str,
    resources: Vec<Value>,
) -> Value {
    json!({
        "reservationId": reservation_id,
        "reservationStartDt": start,
        "reservationEndDt": end,
        "space": { "spaceName": room },
        "resource": resources,
    })
}

/// Create a raw resource line.
pub fn raw_resource(name: &str, quantity: i64, instructions: Option<&str>) -> Value {
    json!({
        "resourceName": name,
        "quantity": quantity,
        "instructions": instructions,
    })
}
