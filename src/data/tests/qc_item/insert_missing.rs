//! Tests for QcItemRepository::insert_missing method.

use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

/// Tests inserting new checklist items.
///
/// Expected: Ok(3) with items stored in the default status
#[tokio::test]
async fn inserts_new_items() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;
    test.ingest().insert_mock_action(100, 10, at(9, 0)).await?;

    let repo = QcItemRepository::new(&test.db);
    let inserted = repo
        .insert_missing(&[item(100, 101), item(100, 102), item(100, 103)])
        .await?;

    assert_eq!(inserted, 3);
    let stored = repo.get_by_action_ids(&[100]).await?;
    assert_eq!(stored.len(), 3);
    assert!(stored.iter().all(|item| item.status == "na"));

    Ok(())
}

/// Tests that existing items are left untouched.
///
/// Expected: Ok(1) with the operator-edited item keeping its status
#[tokio::test]
async fn leaves_existing_items_untouched() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;
    test.ingest().insert_mock_action(100, 10, at(9, 0)).await?;
    let existing = test.ingest().insert_mock_qc_item(100, 101).await?;
    let mut edit = existing.into_active_model();
    edit.status = ActiveValue::Set("pass".to_string());
    edit.update(&test.db).await?;

    let repo = QcItemRepository::new(&test.db);
    let inserted = repo
        .insert_missing(&[item(100, 101), item(100, 102)])
        .await?;

    assert_eq!(inserted, 1);
    let stored = repo.get_by_action_ids(&[100]).await?;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].qc_item_dict_id, 101);
    assert_eq!(stored[0].status, "pass");

    Ok(())
}

/// Tests inserting only items that already exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reinserting_is_a_no_op() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;
    test.ingest().insert_mock_action(100, 10, at(9, 0)).await?;

    let repo = QcItemRepository::new(&test.db);
    repo.insert_missing(&[item(100, 101)]).await?;
    let inserted = repo.insert_missing(&[item(100, 101)]).await?;

    assert_eq!(inserted, 0);

    Ok(())
}

/// Tests inserting with empty input.
///
/// Expected: Ok(0)
#[tokio::test]
async fn handles_empty_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ingest_tables().build().await?;

    let repo = QcItemRepository::new(&test.db);
    let inserted = repo.insert_missing(&[]).await?;

    assert_eq!(inserted, 0);

    Ok(())
}
