use std::collections::HashMap;

use tracing::warn;

use crate::model::raw::RawSeries;

/// Collapses raw series sharing an outer identifier.
///
/// When duplicates exist the entry with the most reservations wins (first seen wins ties);
/// every discarded duplicate is logged. Output keeps the order in which identifiers first
/// appeared. Series whose identifier is not numeric pass through untouched for the
/// structural filter to reject.
///
/// # Returns
/// - `(series, discarded)` - Deduplicated series and the number of duplicates dropped
pub fn dedupe_series(series: Vec<RawSeries>) -> (Vec<RawSeries>, usize) {
    let mut kept: Vec<RawSeries> = Vec::with_capacity(series.len());
    let mut index_by_id: HashMap<i64, usize> = HashMap::new();
    let mut discarded = 0;

    for candidate in series {
        let Some(item_id) = candidate.item_id.as_i64() else {
            kept.push(candidate);
            continue;
        };

        match index_by_id.get(&item_id) {
            Some(&index) => {
                let existing = &mut kept[index];
                let (kept_count, dropped_count) =
                    if candidate.reservation_count() > existing.reservation_count() {
                        let dropped_count = existing.reservation_count();
                        let kept_count = candidate.reservation_count();
                        *existing = candidate;
                        (kept_count, dropped_count)
                    } else {
                        (existing.reservation_count(), candidate.reservation_count())
                    };

                warn!(
                    series_id = item_id,
                    kept_reservations = kept_count,
                    discarded_reservations = dropped_count,
                    "Duplicate series in upstream payload; keeping the richer entry"
                );
                discarded += 1;
            }
            None => {
                index_by_id.insert(item_id, kept.len());
                kept.push(candidate);
            }
        }
    }

    (kept, discarded)
}
