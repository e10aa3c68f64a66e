//! QC checklist derivation.
//!
//! Each action kind maps to a table of `(dictionary id, predicate)` rows; every row whose
//! predicate holds contributes one checklist item. Ids reference the externally owned QC
//! dictionary.

use crate::model::{
    action::{Action, ActionSubType, ActionType},
    enrichment::{AvConfig, EnrichedEvent, HardwareKind},
    event::{EventType, Transform},
    qc::QcItem,
};

pub const CAPTURE_AUDIO: i32 = 101;
pub const CAPTURE_VIDEO: i32 = 102;
pub const CAPTURE_STREAM: i32 = 103;
pub const CAPTURE_LEFT_SOURCE: i32 = 104;
pub const CAPTURE_RIGHT_SOURCE: i32 = 105;
pub const CAPTURE_CENTER_SOURCE: i32 = 106;
pub const CAPTURE_FIRST_LECTURE: i32 = 107;

pub const SET_COMBINE: i32 = 201;
pub const SET_UNCOMBINE: i32 = 202;
pub const SET_LAPELS: i32 = 203;
pub const SET_HANDHELD: i32 = 204;
pub const SET_HANDHELDS: i32 = 205;
pub const SET_LAPTOP: i32 = 206;
pub const SET_INTERACTIVE_DISPLAY: i32 = 207;
pub const SET_POLLING: i32 = 208;

pub const STRIKE_COMBINE: i32 = 301;
pub const STRIKE_UNCOMBINE: i32 = 302;
pub const STRIKE_LAPELS: i32 = 303;
pub const STRIKE_HANDHELD: i32 = 304;
pub const STRIKE_HANDHELDS: i32 = 305;
pub const STRIKE_LAPTOP: i32 = 306;
pub const STRIKE_INTERACTIVE_DISPLAY: i32 = 307;
pub const STRIKE_POLLING: i32 = 308;

pub const SESSION_LEFT_SOURCE: i32 = 401;
pub const SESSION_RIGHT_SOURCE: i32 = 402;
pub const SESSION_CENTER_SOURCE: i32 = 403;
pub const SESSION_FIRST_LECTURE: i32 = 404;
pub const SESSION_HYBRID: i32 = 405;
pub const SESSION_MICROPHONES: i32 = 406;

/// Inputs QC predicates read: the derived event and the AV config as currently stored, so
/// sources entered by operators are taken into account.
pub struct QcContext<'a> {
    pub enriched: &'a EnrichedEvent,
    pub av: &'a AvConfig,
    /// Occurrences of the event's series across the whole payload.
    pub series_events: i32,
}

type QcRule = (i32, fn(&QcContext) -> bool);

const CAPTURE_RULES: &[QcRule] = &[
    (CAPTURE_AUDIO, always),
    (CAPTURE_VIDEO, always),
    (CAPTURE_STREAM, always),
    (CAPTURE_LEFT_SOURCE, has_left_source),
    (CAPTURE_RIGHT_SOURCE, has_right_source),
    (CAPTURE_CENTER_SOURCE, has_center_source),
    (CAPTURE_FIRST_LECTURE, is_first_non_canvas_lecture),
];

const SET_RULES: &[QcRule] = &[
    (SET_COMBINE, combines),
    (SET_UNCOMBINE, uncombines),
    (SET_LAPELS, several_lapels),
    (SET_HANDHELD, one_handheld),
    (SET_HANDHELDS, several_handhelds),
    (SET_LAPTOP, has_laptop),
    (SET_INTERACTIVE_DISPLAY, has_interactive_display),
    (SET_POLLING, has_polling),
];

const STRIKE_RULES: &[QcRule] = &[
    (STRIKE_COMBINE, combines),
    (STRIKE_UNCOMBINE, uncombines),
    (STRIKE_LAPELS, several_lapels),
    (STRIKE_HANDHELD, one_handheld),
    (STRIKE_HANDHELDS, several_handhelds),
    (STRIKE_LAPTOP, has_laptop),
    (STRIKE_INTERACTIVE_DISPLAY, has_interactive_display),
    (STRIKE_POLLING, has_polling),
];

const SESSION_SETUP_RULES: &[QcRule] = &[
    (SESSION_LEFT_SOURCE, has_left_source),
    (SESSION_RIGHT_SOURCE, has_right_source),
    (SESSION_CENTER_SOURCE, has_center_source),
    (SESSION_FIRST_LECTURE, is_first_lecture),
    (SESSION_HYBRID, is_hybrid),
    (SESSION_MICROPHONES, has_microphones),
];

fn rules_for(action: &Action) -> &'static [QcRule] {
    match (action.action_type, action.sub_type) {
        (ActionType::CaptureQc, None) => CAPTURE_RULES,
        (ActionType::Config, Some(ActionSubType::Set)) => SET_RULES,
        (ActionType::Config, Some(ActionSubType::Strike)) => STRIKE_RULES,
        (ActionType::StaffAssistance, Some(ActionSubType::SessionSetup)) => SESSION_SETUP_RULES,
        _ => &[],
    }
}

/// Derives the checklist for one action, ordered by dictionary id.
pub fn derive_qc_items(action: &Action, context: &QcContext) -> Vec<QcItem> {
    rules_for(action)
        .iter()
        .filter(|(_, applies)| applies(context))
        .map(|(qc_item_dict_id, _)| QcItem {
            action_id: action.id,
            qc_item_dict_id: *qc_item_dict_id,
        })
        .collect()
}

fn always(_: &QcContext) -> bool {
    true
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|value| !value.trim().is_empty())
}

fn has_left_source(context: &QcContext) -> bool {
    present(&context.av.left_source)
}

fn has_right_source(context: &QcContext) -> bool {
    present(&context.av.right_source)
}

fn has_center_source(context: &QcContext) -> bool {
    present(&context.av.center_source)
}

fn is_first_lecture(context: &QcContext) -> bool {
    let event = &context.enriched.event;
    context.series_events > 1
        && event.series_position == Some(1)
        && event.event_type == EventType::Lecture
}

fn is_first_non_canvas_lecture(context: &QcContext) -> bool {
    is_first_lecture(context)
        && context
            .enriched
            .recording
            .as_ref()
            .is_some_and(|recording| !recording.is_canvas())
}

fn combines(context: &QcContext) -> bool {
    context.enriched.event.transform == Some(Transform::Combine)
}

fn uncombines(context: &QcContext) -> bool {
    context.enriched.event.transform == Some(Transform::Uncombine)
}

fn several_lapels(context: &QcContext) -> bool {
    context.av.lapel_mics > 1
}

fn one_handheld(context: &QcContext) -> bool {
    context.av.handheld_mics == 1
}

fn several_handhelds(context: &QcContext) -> bool {
    context.av.handheld_mics > 1
}

fn has_hardware(context: &QcContext, kind: HardwareKind) -> bool {
    context
        .enriched
        .other_hardware
        .iter()
        .any(|hardware| hardware.kind == kind)
}

fn has_laptop(context: &QcContext) -> bool {
    has_hardware(context, HardwareKind::Laptop)
}

fn has_interactive_display(context: &QcContext) -> bool {
    has_hardware(context, HardwareKind::InteractiveDisplay)
}

fn has_polling(context: &QcContext) -> bool {
    has_hardware(context, HardwareKind::PollingClickers)
}

fn is_hybrid(context: &QcContext) -> bool {
    context.enriched.hybrid.is_some()
}

fn has_microphones(context: &QcContext) -> bool {
    context.av.has_microphones()
}
