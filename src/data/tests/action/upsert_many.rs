//! Tests for ActionRepository::upsert_many method.
//!
//! This module verifies that derived actions are inserted with default operator state and
//! that re-upserting never overwrites operator-owned columns.

use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

/// Tests inserting new actions.
///
/// Expected: Ok with actions stored as pending and unassigned
#[tokio::test]
async fn inserts_with_default_operator_state() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;
    let action = Action::new(10, ActionType::Config, Some(ActionSubType::Set), at(8, 52)).unwrap();

    let repo = ActionRepository::new(&test.db);
    let result = repo.upsert_many(&[action.clone()]).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let stored = entity::prelude::Action::find_by_id(action.id)
        .one(&test.db)
        .await?
        .expect("action missing");
    assert_eq!(stored.status, "pending");
    assert_eq!(stored.action_type, "CONFIG");
    assert_eq!(stored.sub_type.as_deref(), Some("Set"));
    assert_eq!(stored.assigned_to, None);

    Ok(())
}

/// Tests that operator fields survive a re-upsert of the same action.
///
/// Expected: Ok with status, assignment and notes untouched and start time refreshed
#[tokio::test]
async fn preserves_operator_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;
    let action = Action::new(10, ActionType::Config, Some(ActionSubType::Set), at(8, 52)).unwrap();

    let repo = ActionRepository::new(&test.db);
    repo.upsert_many(&[action.clone()]).await?;

    let stored = entity::prelude::Action::find_by_id(action.id)
        .one(&test.db)
        .await?
        .expect("action missing");
    let created_at = stored.created_at;
    let mut operator_edit = stored.into_active_model();
    operator_edit.status = ActiveValue::Set("COMPLETED".to_string());
    operator_edit.assigned_to = ActiveValue::Set(Some("alex".to_string()));
    operator_edit.notes = ActiveValue::Set(Some("done early".to_string()));
    operator_edit.update(&test.db).await?;

    let mut rescheduled = action.clone();
    rescheduled.start_time = at(8, 45);
    repo.upsert_many(&[rescheduled]).await?;

    let stored = entity::prelude::Action::find_by_id(action.id)
        .one(&test.db)
        .await?
        .expect("action missing");
    assert_eq!(stored.status, "COMPLETED");
    assert_eq!(stored.assigned_to.as_deref(), Some("alex"));
    assert_eq!(stored.notes.as_deref(), Some("done early"));
    assert_eq!(stored.created_at, created_at);
    assert_eq!(stored.start_time, at(8, 45));

    Ok(())
}

/// Tests the foreign key on events.
///
/// Expected: Err when the event does not exist
#[tokio::test]
async fn fails_without_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ingest_tables().build().await?;
    let action = Action::new(10, ActionType::CaptureQc, None, at(9, 0)).unwrap();

    let repo = ActionRepository::new(&test.db);
    let result = repo.upsert_many(&[action]).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests upserting with empty input.
///
/// Expected: Ok
#[tokio::test]
async fn handles_empty_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ingest_tables().build().await?;

    let repo = ActionRepository::new(&test.db);
    let result = repo.upsert_many(&[]).await;

    assert!(result.is_ok());

    Ok(())
}
