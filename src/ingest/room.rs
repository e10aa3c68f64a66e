//! Room name canonicalization and the table of divisible rooms.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::event::Transform;

/// A divisible room: two halves separated by an air wall that can be opened into one space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomFamily {
    pub combined: &'static str,
    pub halves: [&'static str; 2],
}

/// Rooms known to be physically combinable, by canonical name.
pub const ROOM_FAMILIES: &[RoomFamily] = &[
    RoomFamily {
        combined: "GH 1110A&B",
        halves: ["GH 1110A", "GH 1110B"],
    },
    RoomFamily {
        combined: "GH 2410A&B",
        halves: ["GH 2410A", "GH 2410B"],
    },
    RoomFamily {
        combined: "GH 2420A&B",
        halves: ["GH 2420A", "GH 2420B"],
    },
];

/// How a divisible room is configured for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomMode {
    /// Booked as the combined space.
    Combined,
    /// Booked as one of the halves; carries the half index.
    Split(usize),
}

impl RoomMode {
    /// Split halves share one configuration regardless of which half is booked.
    pub fn is_same_configuration(&self, other: &RoomMode) -> bool {
        matches!(
            (self, other),
            (RoomMode::Combined, RoomMode::Combined) | (RoomMode::Split(_), RoomMode::Split(_))
        )
    }

    pub fn transform(&self) -> Transform {
        match self {
            RoomMode::Combined => Transform::Combine,
            RoomMode::Split(_) => Transform::Uncombine,
        }
    }
}

/// Finds the divisible room a canonical room name belongs to.
///
/// # Returns
/// - `Some((family_index, mode))` - Index into [`ROOM_FAMILIES`] and the configuration
/// - `None` - The room is not divisible
pub fn family_of(room_name: &str) -> Option<(usize, RoomMode)> {
    ROOM_FAMILIES
        .iter()
        .enumerate()
        .find_map(|(index, family)| {
            if family.combined == room_name {
                return Some((index, RoomMode::Combined));
            }
            family
                .halves
                .iter()
                .position(|half| *half == room_name)
                .map(|half| (index, RoomMode::Split(half)))
        })
}

fn room_re() -> &'static Regex {
    static ROOM_RE: OnceLock<Regex> = OnceLock::new();
    ROOM_RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z]+)\s*-?\s*(\d+)\s*([A-Za-z](?:\s*&\s*[A-Za-z])?)?$")
            .expect("valid room regex")
    })
}

/// Canonical display form of a room: `GH1420` and `gh-1420` become `GH 1420`, lettered
/// suffixes are kept (`GH 2410A`, `GH 2410A&B`). Names that do not look like a building code
/// followed by a number are only trimmed and whitespace-collapsed.
pub fn canonical_room_name(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    match room_re().captures(&collapsed) {
        Some(caps) => {
            let suffix: String = caps
                .get(3)
                .map(|m| m.as_str().chars().filter(|c| !c.is_whitespace()).collect())
                .unwrap_or_default();

            format!(
                "{} {}{}",
                caps[1].to_ascii_uppercase(),
                &caps[2],
                suffix.to_ascii_uppercase()
            )
        }
        None => collapsed,
    }
}

/// Space component of an event identity: the canonical room with whitespace removed.
pub fn space_key(room_name: &str) -> String {
    room_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}
