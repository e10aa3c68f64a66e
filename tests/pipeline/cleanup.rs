//! Events dropped upstream are removed with everything that hangs off them, unless protected.

use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

fn two_lectures() -> Vec<Value> {
    vec![factory::raw_series(
        5001,
        "FIN 101",
        vec![
            recorded_lecture(1, "2024-09-03T09:00:00", "2024-09-03T10:00:00"),
            recorded_lecture(2, "2024-09-03T13:00:00", "2024-09-03T14:00:00"),
        ],
    )]
}

fn morning_only() -> Vec<Value> {
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

/// Ingests both lectures and returns the id of the afternoon one.
async fn seed(test: &TestContext) -> Result<i64, TestError> {
    IngestService::new(&test.db)
        .run(two_lectures(), date(), &HashSet::new(), early_morning())
        .await
        .expect("seed run failed");

    let events = EventRepository::new(&test.db).get_by_date(date()).await?;
    assert_eq!(events.len(), 2);

    Ok(events[1].id)
}

/// Tests that an event missing upstream is deleted with its actions and QC items.
///
/// Expected: Ok with one event, its two actions and their items removed
#[tokio::test]
async fn deletes_orphaned_event_and_children() -> Result<(), TestError> {
    let test = build().await?;
    let orphan_id = seed(&test).await?;
    let orphan_actions: Vec<i64> = ActionRepository::new(&test.db)
        .get_by_event_ids(&[orphan_id])
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();

    let report = IngestService::new(&test.db)
        .run(morning_only(), date(), &HashSet::new(), early_morning())
        .await;

    assert!(report.is_ok(), "Error: {:?}", report);
    let report = report.unwrap();
    assert_eq!(report.events_deleted, 1);
    assert_eq!(report.actions_deleted, 2);
    assert_eq!(
        entity::prelude::Event::find_by_id(orphan_id)
            .one(&test.db)
            .await?,
        None
    );
    assert!(ActionRepository::new(&test.db)
        .get_by_event_ids(&[orphan_id])
        .await?
        .is_empty());
    assert!(QcItemRepository::new(&test.db)
        .get_by_action_ids(&orphan_actions)
        .await?
        .is_empty());
    assert_eq!(entity::prelude::AvConfig::find().count(&test.db).await?, 1);
    assert_eq!(entity::prelude::Recording::find().count(&test.db).await?, 1);

    Ok(())
}

/// Tests that a caller-protected event survives its disappearance upstream.
///
/// Expected: Ok with nothing deleted
#[tokio::test]
async fn keeps_protected_event() -> Result<(), TestError> {
    let test = build().await?;
    let orphan_id = seed(&test).await?;

    let report = IngestService::new(&test.db)
        .run(
            morning_only(),
            date(),
            &HashSet::from([orphan_id]),
            early_morning(),
        )
        .await;

    assert!(report.is_ok(), "Error: {:?}", report);
    assert_eq!(report.unwrap().events_deleted, 0);
    assert!(entity::prelude::Event::find_by_id(orphan_id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that an event which already started is never deleted.
///
/// Expected: Ok with nothing deleted when the run happens mid-afternoon
#[tokio::test]
async fn keeps_event_already_started() -> Result<(), TestError> {
    let test = build().await?;
    let orphan_id = seed(&test).await?;
    let afternoon = date().and_hms_opt(13, 30, 0).unwrap();

    let report = IngestService::new(&test.db)
        .run(morning_only(), date(), &HashSet::new(), afternoon)
        .await;

    assert!(report.is_ok(), "Error: {:?}", report);
    assert_eq!(report.unwrap().events_deleted, 0);
    assert_eq!(
        ActionRepository::new(&test.db)
            .get_by_event_ids(&[orphan_id])
            .await?
            .len(),
        2
    );

    Ok(())
}

/// Tests that a stale action is removed when its event shortens.
///
/// Expected: Ok with the third capture check and its items deleted
#[tokio::test]
async fn deletes_actions_no_longer_derived() -> Result<(), TestError> {
    let test = build().await?;
    let long = vec![factory::raw_series(
        5001,
        "FIN 101",
        vec![recorded_lecture(
            1,
            "2024-09-03T09:00:00",
            "2024-09-03T10:35:00",
        )],
    )];
    IngestService::new(&test.db)
        .run(long, date(), &HashSet::new(), early_morning())
        .await
        .expect("first run failed");

    let report = IngestService::new(&test.db)
        .run(morning_only(), date(), &HashSet::new(), early_morning())
        .await;

    assert!(report.is_ok(), "Error: {:?}", report);
    let report = report.unwrap();
    assert_eq!(report.events_deleted, 0);
    assert_eq!(report.actions_deleted, 1);
    assert_eq!(report.qc_items_deleted, 3);

    Ok(())
}
