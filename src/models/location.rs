use super::schedule::GroupId;
use crate::config::Config;

/// A named area and the load-shedding group that serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub name: &'static str,
    pub group: &'static str,
}

impl Location {
    pub fn group_id(&self) -> GroupId {
        GroupId::from(self.group)
    }
}

const LOCATIONS: &[Location] = &[
    Location {
        name: "Kathmandu - New Baneshwor",
        group: "Group A",
    },
    Location {
        name: "Kathmandu - Baluwatar",
        group: "Group B",
    },
    Location {
        name: "Lalitpur - Jawalakhel",
        group: "Group C",
    },
    Location {
        name: "Bhaktapur - Durbar Square",
        group: "Group D",
    },
    Location {
        name: "Kathmandu - Maharajgunj",
        group: "Group A",
    },
    Location {
        name: "Lalitpur - Pulchowk",
        group: "Group B",
    },
    Location {
        name: "Kathmandu - Chakrapath",
        group: "Group C",
    },
    Location {
        name: "Bhaktapur - Suryabinayak",
        group: "Group D",
    },
];

/// Outcome of a location search. An empty result is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResults {
    Matches(Vec<Location>),
    NoResults { query: String },
}

impl SearchResults {
    pub fn matches(&self) -> &[Location] {
        match self {
            Self::Matches(locations) => locations,
            Self::NoResults { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoResults { .. })
    }

    /// Message to show in place of results when nothing matched.
    pub fn empty_message(&self) -> Option<String> {
        match self {
            Self::Matches(_) => None,
            Self::NoResults { query } => Some(format!("No locations found matching \"{query}\"")),
        }
    }
}

/// Static directory mapping areas to their load-shedding group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDirectory {
    entries: &'static [Location],
}

impl Default for LocationDirectory {
    fn default() -> Self {
        Self::new(LOCATIONS)
    }
}

impl LocationDirectory {
    pub const fn new(entries: &'static [Location]) -> Self {
        Self { entries }
    }

    pub const fn entries(&self) -> &'static [Location] {
        self.entries
    }

    /// Shortcut locations offered before any search.
    pub fn presets(&self) -> &'static [Location] {
        &self.entries[..self.entries.len().min(Config::PRESET_LOCATIONS)]
    }

    /// Case-insensitive substring search, in directory order.
    pub fn search(&self, query: &str) -> SearchResults {
        let needle = query.to_lowercase();
        let found: Vec<Location> = self
            .entries
            .iter()
            .filter(|location| location.name.to_lowercase().contains(&needle))
            .copied()
            .collect();

        if found.is_empty() {
            SearchResults::NoResults {
                query: query.to_string(),
            }
        } else {
            SearchResults::Matches(found)
        }
    }

    /// Group of the first location matching `query`.
    pub fn resolve_group(&self, query: &str) -> Option<GroupId> {
        self.search(query).matches().first().map(Location::group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let directory = LocationDirectory::default();
        let results = directory.search("LALITPUR");

        let names: Vec<&str> = results.matches().iter().map(|l| l.name).collect();
        assert_eq!(names, ["Lalitpur - Jawalakhel", "Lalitpur - Pulchowk"]);
    }

    #[test]
    fn test_search_keeps_directory_order() {
        let directory = LocationDirectory::default();
        let results = directory.search("kathmandu");

        let names: Vec<&str> = results.matches().iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            [
                "Kathmandu - New Baneshwor",
                "Kathmandu - Baluwatar",
                "Kathmandu - Maharajgunj",
                "Kathmandu - Chakrapath",
            ]
        );
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let directory = LocationDirectory::default();
        assert_eq!(directory.search("").matches().len(), directory.entries().len());
    }

    #[test]
    fn test_no_results_message_quotes_query() {
        let results = LocationDirectory::default().search("Pokhara");

        assert!(results.is_empty());
        assert_eq!(
            results.empty_message().as_deref(),
            Some("No locations found matching \"Pokhara\"")
        );
    }

    #[test]
    fn test_presets_are_first_four_entries() {
        let directory = LocationDirectory::default();
        let presets = directory.presets();

        assert_eq!(presets.len(), 4);
        assert_eq!(presets[0].name, "Kathmandu - New Baneshwor");
        assert_eq!(presets[3].name, "Bhaktapur - Durbar Square");
    }

    #[test]
    fn test_presets_on_small_directory() {
        static SMALL: &[Location] = &[Location {
            name: "Dharan",
            group: "Group B",
        }];
        let directory = LocationDirectory::new(SMALL);

        assert_eq!(directory.presets().len(), 1);
        assert_eq!(directory.resolve_group("dha"), Some(GroupId::from("Group B")));
    }
}
