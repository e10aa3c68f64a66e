//! Tests for EventRepository::get_by_date method.

use super::*;

/// Tests that only events of the requested date are returned, in start order.
///
/// Expected: Ok with the two events of the date, earliest first
#[tokio::test]
async fn returns_events_of_date_in_start_order() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    let other_date = NaiveDate::from_ymd_opt(2024, 9, 4).unwrap();
    test.ingest().insert_mock_series(1).await?;
    test.ingest()
        .insert_mock_event(10, 1, test_date(), at(13, 0))
        .await?;
    test.ingest()
        .insert_mock_event(11, 1, test_date(), at(9, 0))
        .await?;
    test.ingest()
        .insert_mock_event(12, 1, other_date, at(9, 0))
        .await?;

    let repo = EventRepository::new(&test.db);
    let events = repo.get_by_date(test_date()).await?;

    let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![11, 10]);

    Ok(())
}

/// Tests a date without events.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_unknown_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ingest_tables().build().await?;

    let repo = EventRepository::new(&test.db);
    let events = repo.get_by_date(test_date()).await?;

    assert!(events.is_empty());

    Ok(())
}
