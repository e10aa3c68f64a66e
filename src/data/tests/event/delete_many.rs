//! Tests for EventRepository::delete_many method.

use super::*;
use sea_orm::EntityTrait;

/// Tests deleting a subset of events.
///
/// Expected: Ok(1) and the other event left in place
#[tokio::test]
async fn deletes_only_given_events() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;
    test.ingest()
        .insert_mock_event(11, 1, test_date(), at(11, 0))
        .await?;

    let repo = EventRepository::new(&test.db);
    let deleted = repo.delete_many(&[10, 999]).await?;

    assert_eq!(deleted, 1);
    let remaining = entity::prelude::Event::find().all(&test.db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 11);

    Ok(())
}

/// Tests the foreign key from actions.
///
/// Expected: Err while the event still has actions
#[tokio::test]
async fn fails_while_actions_reference_event() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;
    test.ingest().insert_mock_action(100, 10, at(9, 0)).await?;

    let repo = EventRepository::new(&test.db);
    let result = repo.delete_many(&[10]).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests deleting with empty input.
///
/// Expected: Ok(0)
#[tokio::test]
async fn handles_empty_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ingest_tables().build().await?;

    let repo = EventRepository::new(&test.db);
    let deleted = repo.delete_many(&[]).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
