//! Derives hybrid, AV, hardware and recording sub-records from an event's resource lines.

pub mod catalog;
pub mod hybrid;
pub mod recording;

use crate::{
    enrich::{
        catalog::{classify, ResourceKind},
        hybrid::parse_hybrid,
        recording::recording_type,
    },
    error::ingest::IngestError,
    model::{
        enrichment::{AvConfig, EnrichedEvent, HardwareKind, OtherHardware, RecordingConfig},
        event::{Event, Resource},
    },
    rules::config::{DEFAULT_LAPEL_MICS, MAX_HANDHELD_MICS, MAX_LAPEL_MICS},
    util::identity::stable_id,
};

/// Enriches one event.
///
/// The AV config is always produced. When several resources map to the same single
/// sub-record (hybrid, recording) the first one wins; hardware lines sharing an item name are
/// folded into one row with their quantities summed.
pub fn enrich(event: Event) -> Result<EnrichedEvent, IngestError> {
    let mut hybrid = None;
    let mut recording = None;
    let mut other_hardware: Vec<OtherHardware> = Vec::new();
    let mut staff_assistance = false;
    let mut clicker = false;
    let mut handheld = 0i64;
    let mut lapel = 0i64;

    for resource in &event.resources {
        let Some(kind) = classify(&resource.item_name) else {
            continue;
        };

        match kind {
            ResourceKind::WebConference => {
                if hybrid.is_none() {
                    hybrid = Some(parse_hybrid(resource.instruction.as_deref()));
                }
            }
            ResourceKind::StaffAssistance => staff_assistance = true,
            ResourceKind::Recording => {
                if recording.is_none() {
                    recording = Some(RecordingConfig {
                        recording_type: recording_type(&resource.item_name),
                        instructions: resource.instruction.clone(),
                    });
                }
            }
            ResourceKind::HandheldMic => handheld += i64::from(resource.quantity),
            ResourceKind::LapelMic => lapel += i64::from(resource.quantity),
            ResourceKind::PresentationClicker => clicker = true,
            ResourceKind::PollingClickers => {
                add_hardware(&mut other_hardware, event.id, resource, HardwareKind::PollingClickers)?
            }
            ResourceKind::Laptop => {
                add_hardware(&mut other_hardware, event.id, resource, HardwareKind::Laptop)?
            }
            ResourceKind::InteractiveDisplay => add_hardware(
                &mut other_hardware,
                event.id,
                resource,
                HardwareKind::InteractiveDisplay,
            )?,
        }
    }

    let av_config = AvConfig {
        handheld_mics: handheld.clamp(0, i64::from(MAX_HANDHELD_MICS)) as i32,
        lapel_mics: lapel.clamp(i64::from(DEFAULT_LAPEL_MICS), i64::from(MAX_LAPEL_MICS)) as i32,
        clicker,
        ..AvConfig::default()
    };

    Ok(EnrichedEvent {
        event,
        hybrid,
        av_config,
        other_hardware,
        recording,
        staff_assistance,
    })
}

fn add_hardware(
    rows: &mut Vec<OtherHardware>,
    event_id: i64,
    resource: &Resource,
    kind: HardwareKind,
) -> Result<(), IngestError> {
    match rows.iter_mut().find(|row| row.item_name == resource.item_name) {
        Some(existing) => existing.quantity = existing.quantity.saturating_add(resource.quantity),
        None => rows.push(OtherHardware {
            id: stable_id(&[event_id.to_string(), resource.item_name.clone()])?,
            kind,
            item_name: resource.item_name.clone(),
            quantity: resource.quantity,
            instructions: resource.instruction.clone(),
        }),
    }

    Ok(())
}
