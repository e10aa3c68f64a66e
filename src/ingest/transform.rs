use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{ingest::room::family_of, model::event::Event};

/// Marks the events at which a divisible room changes configuration.
///
/// Events are grouped per room family and day and ordered by start time, ties broken by event
/// id. The first event of each group is marked with its configuration; every later event is
/// marked only when its configuration differs from the one before it. Events outside any
/// family are left unmarked.
pub fn assign_transforms(events: &mut [Event]) {
    let mut groups: BTreeMap<(usize, NaiveDate), Vec<usize>> = BTreeMap::new();

    for (index, event) in events.iter_mut().enumerate() {
        event.transform = None;
        if let Some((family, _)) = family_of(&event.room_name) {
            groups.entry((family, event.date)).or_default().push(index);
        }
    }

    for indices in groups.values_mut() {
        indices.sort_by_key(|&index| (events[index].start_time, events[index].id));

        let mut previous = None;
        for &index in indices.iter() {
            let Some((_, mode)) = family_of(&events[index].room_name) else {
                continue;
            };

            let changed = previous.is_none_or(|prev| !mode.is_same_configuration(&prev));
            if changed {
                events[index].transform = Some(mode.transform());
            }
            previous = Some(mode);
        }
    }
}
