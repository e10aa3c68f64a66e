//! Tests for QcItemRepository::delete_pairs and delete_by_action_ids methods.

use super::*;

/// Tests that only the exact pairs given are deleted.
///
/// Expected: Ok(1) with the same dictionary id on another action untouched
#[tokio::test]
async fn deletes_exact_pairs() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;
    test.ingest().insert_mock_action(100, 10, at(9, 0)).await?;
    test.ingest().insert_mock_action(200, 10, at(9, 30)).await?;
    test.ingest().insert_mock_qc_item(100, 104).await?;
    test.ingest().insert_mock_qc_item(100, 101).await?;
    test.ingest().insert_mock_qc_item(200, 104).await?;

    let repo = QcItemRepository::new(&test.db);
    let deleted = repo.delete_pairs(&[item(100, 104)]).await?;

    assert_eq!(deleted, 1);
    let remaining: Vec<(i64, i32)> = repo
        .get_by_action_ids(&[100, 200])
        .await?
        .into_iter()
        .map(|item| (item.action_id, item.qc_item_dict_id))
        .collect();
    assert_eq!(remaining, vec![(100, 101), (200, 104)]);

    Ok(())
}

/// Tests deleting every item of an action.
///
/// Expected: Ok(2) with the other action's items untouched
#[tokio::test]
async fn deletes_by_action_ids() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;
    test.ingest().insert_mock_action(100, 10, at(9, 0)).await?;
    test.ingest().insert_mock_action(200, 10, at(9, 30)).await?;
    test.ingest().insert_mock_qc_item(100, 101).await?;
    test.ingest().insert_mock_qc_item(100, 102).await?;
    test.ingest().insert_mock_qc_item(200, 101).await?;

    let repo = QcItemRepository::new(&test.db);
    let deleted = repo.delete_by_action_ids(&[100]).await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.get_by_action_ids(&[200]).await?.len(), 1);

    Ok(())
}

/// Tests deleting with empty input.
///
/// Expected: Ok(0)
#[tokio::test]
async fn handles_empty_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ingest_tables().build().await?;

    let repo = QcItemRepository::new(&test.db);

    assert_eq!(repo.delete_pairs(&[]).await?, 0);
    assert_eq!(repo.delete_by_action_ids(&[]).await?, 0);

    Ok(())
}
