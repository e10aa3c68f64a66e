//! A single recorded lecture flowing through every stage.

use super::*;
use sea_orm::EntityTrait;

fn payload() -> Vec<Value> {
    vec![factory::raw_series(
        5001,
        "FIN 101",
        vec![recorded_lecture(
            1,
            "2024-09-03T09:00:00",
            "2024-09-03T10:00:00",
        )],
    )]
}

/// Tests the stored shape of a one-hour recorded lecture.
///
/// Expected: Ok with two CAPTURE QC actions, no CONFIG or staff actions, one default lapel
#[tokio::test]
async fn recorded_lecture_produces_capture_checks() -> Result<(), TestError> {
    let test = build().await?;

    let report = IngestService::new(&test.db)
        .run(payload(), date(), &HashSet::new(), early_morning())
        .await;

    assert!(report.is_ok(), "Error: {:?}", report);
    let events = EventRepository::new(&test.db).get_by_date(date()).await?;
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.room_name, "GH 1420");
    assert_eq!(event.venue_id, Some(1));
    assert_eq!(event.series_position, Some(1));

    let actions = ActionRepository::new(&test.db)
        .get_by_event_ids(&[event.id])
        .await?;
    assert_eq!(actions.len(), 2);
    assert!(actions.iter().all(|a| a.action_type == "CAPTURE QC"));
    let starts: Vec<String> = actions
        .iter()
        .map(|a| a.start_time.format("%H:%M").to_string())
        .collect();
    assert_eq!(starts, vec!["09:00", "09:30"]);

    let av = entity::prelude::AvConfig::find_by_id(event.id)
        .one(&test.db)
        .await?
        .expect("av config missing");
    assert_eq!(av.handheld_mics, 0);
    assert_eq!(av.lapel_mics, 1);

    let recording = entity::prelude::Recording::find_by_id(event.id)
        .one(&test.db)
        .await?
        .expect("recording missing");
    assert_eq!(recording.recording_type, "CANVAS");

    Ok(())
}

/// Tests that malformed records are skipped without failing the run.
///
/// Expected: Ok with the malformed record counted and the valid one stored
#[tokio::test]
async fn skips_malformed_records() -> Result<(), TestError> {
    let test = build().await?;
    let mut raw = payload();
    raw.push(serde_json::json!({ "itemName": "no identifiers" }));

    let report = IngestService::new(&test.db)
        .run(raw, date(), &HashSet::new(), early_morning())
        .await;

    assert!(report.is_ok(), "Error: {:?}", report);
    let report = report.unwrap();
    assert_eq!(report.skipped_records, 1);
    assert_eq!(report.events_upserted, 1);

    Ok(())
}
