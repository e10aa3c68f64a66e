//! Tests for AvConfigRepository::upsert_many method.

use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

fn derived(handheld_mics: i32, lapel_mics: i32) -> AvConfig {
    AvConfig {
        handheld_mics,
        lapel_mics,
        ..AvConfig::default()
    }
}

/// Tests inserting a config for a new event.
///
/// Expected: Ok with derived counts stored and sources empty
#[tokio::test]
async fn inserts_new_config() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;

    let repo = AvConfigRepository::new(&test.db);
    let result = repo.upsert_many(&[(10, derived(1, 2))]).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let stored = result.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].handheld_mics, 1);
    assert_eq!(stored[0].lapel_mics, 2);
    assert_eq!(stored[0].left_source, None);

    Ok(())
}

/// Tests that operator-entered sources survive a refresh of derived columns.
///
/// Expected: Ok with new microphone counts and the operator's left source returned
#[tokio::test]
async fn preserves_operator_sources() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ingest_tables().build().await?;
    test.ingest()
        .insert_mock_series_with_event(1, 10, test_date(), at(9, 0))
        .await?;

    let repo = AvConfigRepository::new(&test.db);
    repo.upsert_many(&[(10, derived(0, 1))]).await?;

    let stored = entity::prelude::AvConfig::find_by_id(10)
        .one(&test.db)
        .await?
        .expect("config missing");
    let mut edit = stored.into_active_model();
    edit.left_source = ActiveValue::Set(Some("Podium PC".to_string()));
    edit.update(&test.db).await?;

    let stored = repo.upsert_many(&[(10, derived(2, 1))]).await?;

    assert_eq!(stored[0].handheld_mics, 2);
    assert_eq!(stored[0].left_source.as_deref(), Some("Podium PC"));
    assert_eq!(
        AvConfig::from(stored[0].clone()).left_source.as_deref(),
        Some("Podium PC")
    );

    Ok(())
}
