//! Tests for ActionRepository::delete_many method.

use super::*;
use sea_orm::EntityTrait;

/// Tests deleting a subset of actions.
///
/// Expected: Ok(1) and the other action left in place
#[tokio::test]
async fn deletes_only_given_actions() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;
    test.ingest().insert_mock_action(100, 10, at(9, 0)).await?;
    test.ingest().insert_mock_action(101, 10, at(9, 30)).await?;

    let repo = ActionRepository::new(&test.db);
    let deleted = repo.delete_many(&[100]).await?;

    assert_eq!(deleted, 1);
    let remaining = entity::prelude::Action::find().all(&test.db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 101);

    Ok(())
}
