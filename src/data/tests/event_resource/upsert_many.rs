//! Tests for EventResourceRepository upsert and cleanup methods.

use super::*;

fn line(name: &str, quantity: i32) -> Resource {
    Resource {
        item_name: name.to_string(),
        quantity,
        instruction: None,
    }
}

/// Tests inserting and then refreshing resource lines.
///
/// Expected: Ok with one row per id and the refreshed quantity stored
#[tokio::test]
async fn upserts_resource_lines() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;

    let repo = EventResourceRepository::new(&test.db);
    repo.upsert_many(&[(1, 10, line("Laptop", 1)), (2, 10, line("Lapel", 1))])
        .await?;
    repo.upsert_many(&[(1, 10, line("Laptop", 2))]).await?;

    let mut ids = repo.get_ids_by_event_ids(&[10]).await?;
    ids.sort();
    assert_eq!(ids, vec![1, 2]);

    Ok(())
}

/// Tests deleting stale lines by id and all lines of an event.
///
/// Expected: Ok with counts matching the rows removed
#[tokio::test]
async fn deletes_lines() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;

    let repo = EventResourceRepository::new(&test.db);
    repo.upsert_many(&[
        (1, 10, line("Laptop", 1)),
        (2, 10, line("Lapel", 1)),
        (3, 10, line("Handheld", 1)),
    ])
    .await?;

    assert_eq!(repo.delete_many(&[2]).await?, 1);
    assert_eq!(repo.delete_by_event_ids(&[10]).await?, 2);
    assert!(repo.get_ids_by_event_ids(&[10]).await?.is_empty());

    Ok(())
}
