use std::collections::HashMap;

/// Case- and whitespace-insensitive lookup from room names to venue ids.
#[derive(Debug, Clone, Default)]
pub struct VenueDirectory {
    by_key: HashMap<String, i32>,
}

impl VenueDirectory {
    /// Builds the directory from `(id, name, alternate spelling)` rows.
    ///
    /// Primary names take precedence over alternate spellings when both map to the same key.
    pub fn new(venues: impl IntoIterator<Item = (i32, String, Option<String>)>) -> Self {
        let mut by_key = HashMap::new();
        let mut spellings = Vec::new();

        for (id, name, spelling) in venues {
            by_key.entry(lookup_key(&name)).or_insert(id);
            if let Some(spelling) = spelling {
                spellings.push((lookup_key(&spelling), id));
            }
        }
        for (key, id) in spellings {
            by_key.entry(key).or_insert(id);
        }

        Self { by_key }
    }

    pub fn resolve(&self, room_name: &str) -> Option<i32> {
        self.by_key.get(&lookup_key(room_name)).copied()
    }
}

impl From<Vec<entity::venue::Model>> for VenueDirectory {
    fn from(venues: Vec<entity::venue::Model>) -> Self {
        Self::new(
            venues
                .into_iter()
                .map(|venue| (venue.id, venue.name, venue.spelling)),
        )
    }
}

fn lookup_key(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
