//! Geographic rollups over user records.

use crate::model::User;
use std::collections::HashMap;

/// Label for users without a city (or country).
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Number of entries kept in the city rollup.
pub const TOP_CITIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCount {
    pub name: String,
    pub count: u64,
}

impl LocationCount {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Location names with their user counts, most populated first.
///
/// Equal counts keep the order in which the names were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationRollup {
    entries: Vec<LocationCount>,
}

impl LocationRollup {
    /// Groups `values`, mapping absent or empty ones to [`UNKNOWN_LOCATION`], and
    /// keeps at most `limit` entries after sorting.
    pub fn from_values<'a>(
        values: impl IntoIterator<Item = Option<&'a str>>,
        limit: Option<usize>,
    ) -> Self {
        let mut entries: Vec<LocationCount> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for value in values {
            let name = match value {
                Some(name) if !name.is_empty() => name,
                _ => UNKNOWN_LOCATION,
            };
            match index.get(name) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    index.insert(name.to_string(), entries.len());
                    entries.push(LocationCount::new(name, 1));
                }
            }
        }

        // sort_by is stable: ties stay in first-seen order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Self { entries }
    }

    /// Users grouped by city, top [`TOP_CITIES`] only.
    pub fn by_city(users: &[User]) -> Self {
        Self::from_values(users.iter().map(|u| u.city.as_deref()), Some(TOP_CITIES))
    }

    /// Users grouped by country, unbounded.
    pub fn by_country(users: &[User]) -> Self {
        Self::from_values(users.iter().map(|u| u.country.as_deref()), None)
    }

    pub fn entries(&self) -> &[LocationCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, count)` pairs, handy for assertions and log lines.
    pub fn pairs(&self) -> Vec<(&str, u64)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.count))
            .collect()
    }
}
