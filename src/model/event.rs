use chrono::{NaiveDate, NaiveTime};

/// Closed set of event types the rules engine distinguishes, plus upstream passthrough.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    Lecture,
    Kec,
    Cmc,
    AdHocClassMeeting,
    Other(String),
}

impl EventType {
    pub fn from_upstream(value: &str) -> Self {
        match value.trim() {
            "Lecture" => Self::Lecture,
            "KEC" => Self::Kec,
            "CMC" => Self::Cmc,
            "Ad Hoc Class Meeting" => Self::AdHocClassMeeting,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Lecture => "Lecture",
            Self::Kec => "KEC",
            Self::Cmc => "CMC",
            Self::AdHocClassMeeting => "Ad Hoc Class Meeting",
            Self::Other(value) => value,
        }
    }
}

/// Marks an event at which a divisible room enters or leaves its combined configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Combine,
    Uncombine,
}

impl Transform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Combine => "COMBINE",
            Self::Uncombine => "UNCOMBINE",
        }
    }
}

/// One resource line requested on a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub item_name: String,
    pub quantity: i32,
    pub instruction: Option<String>,
}

/// One concrete room occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub series_id: i64,
    pub reservation_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub event_name: String,
    pub event_type: EventType,
    pub room_name: String,
    pub venue_id: Option<i32>,
    pub resources: Vec<Resource>,
    pub series_position: Option<i32>,
    pub transform: Option<Transform>,
}

/// Aggregate attributes of a recurring booking, derived only from its events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSummary {
    pub id: i64,
    pub name: String,
    pub event_type: EventType,
    pub total_events: i32,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}
