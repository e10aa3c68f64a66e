//! Divisible rooms: pairing of halves into the combined space and configuration changes.

use super::*;

fn half(reservation_id: i64, room: &str, start: &str, end: &str) -> Value {
    factory::raw_reservation(reservation_id, room, start, end, vec![])
}

async fn run(raw: Vec<Value>) -> Result<Vec<entity::event::Model>, TestError> {
    let test = build().await?;
    let report = IngestService::new(&test.db)
        .run(raw, date(), &HashSet::new(), early_morning())
        .await;
    assert!(report.is_ok(), "Error: {:?}", report);

    Ok(EventRepository::new(&test.db).get_by_date(date()).await?)
}

/// Tests that both halves booked for the same meeting become one combined event.
///
/// Expected: Ok with a single event in the combined room marked COMBINE
#[tokio::test]
async fn merges_matching_halves() -> Result<(), TestError> {
    let events = run(vec![factory::raw_series(
        6001,
        "MGT 450",
        vec![
            half(1, "GH2410A", "2024-09-03T11:00:00", "2024-09-03T12:00:00"),
            half(2, "GH2410B", "2024-09-03T11:00:00", "2024-09-03T12:00:00"),
        ],
    )])
    .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].room_name, "GH 2410A&B");
    assert_eq!(events[0].transform.as_deref(), Some("COMBINE"));

    Ok(())
}

/// Tests that a lone half is stored as booked.
///
/// Expected: Ok with a single event in the half room marked UNCOMBINE
#[tokio::test]
async fn lone_half_is_not_merged() -> Result<(), TestError> {
    let events = run(vec![factory::raw_series(
        6001,
        "MGT 450",
        vec![half(
            1,
            "GH2410A",
            "2024-09-03T11:00:00",
            "2024-09-03T12:00:00",
        )],
    )])
    .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].room_name, "GH 2410A");
    assert_eq!(events[0].transform.as_deref(), Some("UNCOMBINE"));

    Ok(())
}

/// Tests that only configuration changes within a family are marked.
///
/// Expected: Ok with the second split booking carrying no transform
#[tokio::test]
async fn marks_only_configuration_changes() -> Result<(), TestError> {
    let events = run(vec![
        factory::raw_series(
            6001,
            "MGT 450",
            vec![half(
                1,
                "GH2410A",
                "2024-09-03T08:00:00",
                "2024-09-03T09:00:00",
            )],
        ),
        factory::raw_series(
            6101,
            "MGT 451",
            vec![half(
                2,
                "GH2410B",
                "2024-09-03T10:00:00",
                "2024-09-03T11:00:00",
            )],
        ),
        factory::raw_series(
            6201,
            "MGT 452",
            vec![half(
                3,
                "GH2410A&B",
                "2024-09-03T12:00:00",
                "2024-09-03T13:00:00",
            )],
        ),
    ])
    .await?;

    let transforms: Vec<(&str, Option<&str>)> = events
        .iter()
        .map(|e| (e.room_name.as_str(), e.transform.as_deref()))
        .collect();
    assert_eq!(
        transforms,
        vec![
            ("GH 2410A", Some("UNCOMBINE")),
            ("GH 2410B", None),
            ("GH 2410A&B", Some("COMBINE")),
        ]
    );

    Ok(())
}
