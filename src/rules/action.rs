use chrono::NaiveTime;

use crate::{
    error::ingest::IngestError,
    model::{
        action::{Action, ActionSubType, ActionType},
        enrichment::EnrichedEvent,
    },
    rules::config::{CAPTURE_QC_INTERVAL_SECS, SETUP_LEAD_SECS},
    util::time::{offset_clamped, seconds_between},
};

/// One row of the action table: when it fires and at which times.
pub struct ActionRule {
    pub action_type: ActionType,
    pub sub_type: Option<ActionSubType>,
    pub applies: fn(&EnrichedEvent) -> bool,
    pub schedule: fn(&EnrichedEvent) -> Vec<NaiveTime>,
}

/// Every action the rules engine can emit. Set and Strike share one predicate and one start
/// time so they are always emitted as a pair.
pub const ACTION_RULES: &[ActionRule] = &[
    ActionRule {
        action_type: ActionType::Config,
        sub_type: Some(ActionSubType::Set),
        applies: needs_room_config,
        schedule: before_start,
    },
    ActionRule {
        action_type: ActionType::Config,
        sub_type: Some(ActionSubType::Strike),
        applies: needs_room_config,
        schedule: before_start,
    },
    ActionRule {
        action_type: ActionType::StaffAssistance,
        sub_type: Some(ActionSubType::SessionSetup),
        applies: needs_staff,
        schedule: before_start,
    },
    ActionRule {
        action_type: ActionType::CaptureQc,
        sub_type: None,
        applies: is_recorded,
        schedule: capture_checks,
    },
];

/// Derives every action for one enriched event, in table order.
pub fn derive_actions(enriched: &EnrichedEvent) -> Result<Vec<Action>, IngestError> {
    let mut actions = Vec::new();

    for rule in ACTION_RULES {
        if !(rule.applies)(enriched) {
            continue;
        }
        for start_time in (rule.schedule)(enriched) {
            actions.push(Action::new(
                enriched.event.id,
                rule.action_type,
                rule.sub_type,
                start_time,
            )?);
        }
    }

    Ok(actions)
}

fn needs_room_config(enriched: &EnrichedEvent) -> bool {
    enriched.av_config.lapel_mics > 1
        || enriched.av_config.handheld_mics >= 1
        || !enriched.other_hardware.is_empty()
        || enriched.event.transform.is_some()
}

fn needs_staff(enriched: &EnrichedEvent) -> bool {
    enriched.hybrid.is_some() || enriched.staff_assistance
}

fn is_recorded(enriched: &EnrichedEvent) -> bool {
    enriched.recording.is_some()
}

fn before_start(enriched: &EnrichedEvent) -> Vec<NaiveTime> {
    vec![offset_clamped(enriched.event.start_time, -SETUP_LEAD_SECS)]
}

/// One check per whole interval that fits in the event, the first at the event start.
fn capture_checks(enriched: &EnrichedEvent) -> Vec<NaiveTime> {
    let duration = seconds_between(enriched.event.start_time, enriched.event.end_time);
    if duration <= 0 {
        return Vec::new();
    }

    (0..duration / CAPTURE_QC_INTERVAL_SECS)
        .map(|index| offset_clamped(enriched.event.start_time, index * CAPTURE_QC_INTERVAL_SECS))
        .collect()
}
