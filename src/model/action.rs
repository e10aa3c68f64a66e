use chrono::NaiveTime;

use crate::{error::ingest::IngestError, util::identity::stable_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Config,
    StaffAssistance,
    CaptureQc,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "CONFIG",
            Self::StaffAssistance => "STAFF ASSISTANCE",
            Self::CaptureQc => "CAPTURE QC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionSubType {
    Set,
    Strike,
    SessionSetup,
}

impl ActionSubType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Set => "Set",
            Self::Strike => "Strike",
            Self::SessionSetup => "Session Setup",
        }
    }
}

/// Status given to actions on first insert.
pub const DEFAULT_ACTION_STATUS: &str = "pending";

/// A derived unit of operator work. Only the rules-engine owned fields live here; operator
/// fields (status, assignment, completion, notes) exist only in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub id: i64,
    pub event_id: i64,
    pub action_type: ActionType,
    pub sub_type: Option<ActionSubType>,
    pub start_time: NaiveTime,
}

impl Action {
    /// Builds an action whose id is keyed on its sub type, or on its start time when it has none.
    pub fn new(
        event_id: i64,
        action_type: ActionType,
        sub_type: Option<ActionSubType>,
        start_time: NaiveTime,
    ) -> Result<Self, IngestError> {
        let discriminator = match sub_type {
            Some(sub_type) => sub_type.as_str().to_string(),
            None => start_time.format("%H:%M:%S").to_string(),
        };
        let id = stable_id(&[
            event_id.to_string(),
            action_type.as_str().to_string(),
            discriminator,
        ])?;

        Ok(Self {
            id,
            event_id,
            action_type,
            sub_type,
            start_time,
        })
    }
}
