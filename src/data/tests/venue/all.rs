//! Tests for VenueRepository::all method.

use super::*;

/// Tests loading every venue ordered by id.
///
/// Expected: Ok with both venues in id order
#[tokio::test]
async fn returns_all_venues_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Venue)
        .with_venue(2, "GH 2410A&B", Some("GH 2410 A&B"))
        .with_venue(1, "GH 1420", None)
        .build()
        .await?;

    let repo = VenueRepository::new(&test.db);
    let venues = repo.all().await?;

    assert_eq!(venues.len(), 2);
    assert_eq!(venues[0].id, 1);
    assert_eq!(venues[1].spelling.as_deref(), Some("GH 2410 A&B"));

    Ok(())
}

/// Tests error handling when the venue table is missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let repo = VenueRepository::new(&test.db);
    let result = repo.all().await;

    assert!(result.is_err());

    Ok(())
}
