//! Repeated runs converge and never touch operator-owned state.

use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

fn payload() -> Vec<Value> {
    vec![factory::raw_series(
        5001,
        "FIN 101",
        vec![
            recorded_lecture(1, "2024-09-03T09:00:00", "2024-09-03T10:35:00"),
            factory::raw_reservation(
                2,
                "GH1420",
                "2024-09-03T13:00:00",
                "2024-09-03T14:00:00",
                vec![
                    factory::raw_resource("Handheld Microphone", 2, None),
                    factory::raw_resource(
                        "Web Conference (Zoom)",
                        1,
                        Some("https://ucsd.zoom.us/j/123456789\nPasscode: abc"),
                    ),
                ],
            ),
        ],
    )]
}

/// `updated_at` is refreshed on every upsert.
fn without_timestamps(events: Vec<entity::event::Model>) -> Vec<entity::event::Model> {
    events
        .into_iter()
        .map(|event| entity::event::Model {
            updated_at: Default::default(),
            ..event
        })
        .collect()
}

/// Tests that a second run over the same payload changes nothing.
///
/// Expected: Ok with a steady-state report and identical stored rows
#[tokio::test]
async fn second_run_is_steady_state() -> Result<(), TestError> {
    let test = build().await?;
    let service = IngestService::new(&test.db);

    let first = service
        .run(payload(), date(), &HashSet::new(), early_morning())
        .await;
    assert!(first.is_ok(), "Error: {:?}", first);
    let events = without_timestamps(EventRepository::new(&test.db).get_by_date(date()).await?);
    let event_ids: Vec<i64> = events.iter().map(|e| e.id).collect();
    let actions = ActionRepository::new(&test.db)
        .get_by_event_ids(&event_ids)
        .await?;
    let action_ids: Vec<i64> = actions.iter().map(|a| a.id).collect();
    let qc_items = QcItemRepository::new(&test.db)
        .get_by_action_ids(&action_ids)
        .await?;

    let second = service
        .run(payload(), date(), &HashSet::new(), early_morning())
        .await;

    assert!(second.is_ok(), "Error: {:?}", second);
    assert!(second.unwrap().is_steady_state());
    assert_eq!(
        without_timestamps(EventRepository::new(&test.db).get_by_date(date()).await?),
        events
    );
    assert_eq!(
        ActionRepository::new(&test.db)
            .get_by_event_ids(&event_ids)
            .await?,
        actions
    );
    assert_eq!(
        QcItemRepository::new(&test.db)
            .get_by_action_ids(&action_ids)
            .await?,
        qc_items
    );

    Ok(())
}

/// Tests that separate databases fed the same payload derive the same identifiers.
///
/// Expected: Ok with equal event and action id sets
#[tokio::test]
async fn identifiers_are_deterministic() -> Result<(), TestError> {
    let first = build().await?;
    let second = build().await?;

    for test in [&first, &second] {
        IngestService::new(&test.db)
            .run(payload(), date(), &HashSet::new(), early_morning())
            .await
            .expect("run failed");
    }

    let ids = |events: Vec<entity::event::Model>| -> Vec<i64> {
        events.into_iter().map(|e| e.id).collect()
    };
    let first_events = ids(EventRepository::new(&first.db).get_by_date(date()).await?);
    let second_events = ids(EventRepository::new(&second.db).get_by_date(date()).await?);
    assert_eq!(first_events, second_events);

    let first_actions: Vec<i64> = ActionRepository::new(&first.db)
        .get_by_event_ids(&first_events)
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();
    let second_actions: Vec<i64> = ActionRepository::new(&second.db)
        .get_by_event_ids(&second_events)
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(first_actions, second_actions);

    Ok(())
}

/// Tests that operator edits survive a re-run.
///
/// Expected: Ok with action status, QC status and AV sources unchanged
#[tokio::test]
async fn preserves_operator_state() -> Result<(), TestError> {
    let test = build().await?;
    let service = IngestService::new(&test.db);
    service
        .run(payload(), date(), &HashSet::new(), early_morning())
        .await
        .expect("first run failed");

    let events = EventRepository::new(&test.db).get_by_date(date()).await?;
    let event_id = events[0].id;
    let action = ActionRepository::new(&test.db)
        .get_by_event_ids(&[event_id])
        .await?
        .remove(0);
    let action_id = action.id;
    let mut action = action.into_active_model();
    action.status = ActiveValue::Set("done".to_string());
    action.notes = ActiveValue::Set(Some("checked by hand".to_string()));
    action.update(&test.db).await?;

    let qc_item = QcItemRepository::new(&test.db)
        .get_by_action_ids(&[action_id])
        .await?
        .remove(0);
    let qc_key = (qc_item.action_id, qc_item.qc_item_dict_id);
    let mut qc_item = qc_item.into_active_model();
    qc_item.status = ActiveValue::Set("pass".to_string());
    qc_item.update(&test.db).await?;

    let av = entity::prelude::AvConfig::find_by_id(event_id)
        .one(&test.db)
        .await?
        .expect("av config missing");
    let mut av = av.into_active_model();
    av.left_source = ActiveValue::Set(Some("Podium PC".to_string()));
    av.update(&test.db).await?;

    let report = service
        .run(payload(), date(), &HashSet::new(), early_morning())
        .await;

    assert!(report.is_ok(), "Error: {:?}", report);
    let stored_action = entity::prelude::Action::find_by_id(action_id)
        .one(&test.db)
        .await?
        .expect("action missing");
    assert_eq!(stored_action.status, "done");
    assert_eq!(stored_action.notes.as_deref(), Some("checked by hand"));
    let stored_qc = entity::prelude::QcItem::find_by_id(qc_key)
        .one(&test.db)
        .await?
        .expect("qc item missing");
    assert_eq!(stored_qc.status, "pass");
    let stored_av = entity::prelude::AvConfig::find_by_id(event_id)
        .one(&test.db)
        .await?
        .expect("av config missing");
    assert_eq!(stored_av.left_source.as_deref(), Some("Podium PC"));

    Ok(())
}

/// Tests that an operator-entered source adds its checklist item on the next run.
///
/// Expected: Ok with one left-source item inserted per capture check
#[tokio::test]
async fn stored_sources_drive_checklists() -> Result<(), TestError> {
    let test = build().await?;
    let service = IngestService::new(&test.db);
    service
        .run(payload(), date(), &HashSet::new(), early_morning())
        .await
        .expect("first run failed");

    let event_id = EventRepository::new(&test.db).get_by_date(date()).await?[0].id;
    let av = entity::prelude::AvConfig::find_by_id(event_id)
        .one(&test.db)
        .await?
        .expect("av config missing");
    let mut av = av.into_active_model();
    av.left_source = ActiveValue::Set(Some("Podium PC".to_string()));
    av.update(&test.db).await?;

    let report = service
        .run(payload(), date(), &HashSet::new(), early_morning())
        .await;

    assert!(report.is_ok(), "Error: {:?}", report);
    let report = report.unwrap();
    assert_eq!(report.qc_items_inserted, 3);
    assert_eq!(report.qc_items_deleted, 0);
    assert_eq!(report.actions_inserted, 0);

    Ok(())
}
