use crate::model::raw::RawSeries;

/// Item names upstream uses for private placeholder bookings.
const PRIVATE_PLACEHOLDER_NAMES: &[&str] = &["(private)", "private"];

/// Why a raw series is excluded from ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Private,
    MissingIdentifier,
    MultiRoomSubject,
}

/// Checks a raw series against the series-level exclusion rules.
///
/// Multi-room subjects (containing `&`) are dropped here; combined rooms are rebuilt from
/// their halves during the merge step instead.
pub fn check_series(series: &RawSeries) -> Result<(), Rejection> {
    let name = series.item_name.trim().to_ascii_lowercase();
    if series.is_private == Some(true) || PRIVATE_PLACEHOLDER_NAMES.contains(&name.as_str()) {
        return Err(Rejection::Private);
    }

    let has_identifiers = series.item_id.as_i64().is_some()
        && series
            .item_id2
            .as_ref()
            .and_then(|id| id.as_i64())
            .is_some();
    if !has_identifiers {
        return Err(Rejection::MissingIdentifier);
    }

    if series
        .subject
        .as_deref()
        .is_some_and(|subject| subject.contains('&'))
    {
        return Err(Rejection::MultiRoomSubject);
    }

    Ok(())
}
