use crate::history::HistoricalRange;

/// A remembered dashboard location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub country: String,
}

impl Location {
    /// Identity key: different spellings of the same city ("Madrid",
    /// " madrid ") must collapse to one entry.
    fn key(city: &str) -> String {
        city.trim().to_lowercase()
    }
}

/// Mutable dashboard state, owned by the orchestrator.
///
/// `current_city` / `current_country` always name the most recently
/// *successfully fetched* city, never raw search input.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub current_city: String,
    pub current_country: String,
    pub active_range: HistoricalRange,
    locations: Vec<Location>,
    active: Option<usize>,
}

impl ViewState {
    pub fn new(initial_city: impl Into<String>) -> Self {
        Self {
            current_city: initial_city.into(),
            ..Self::default()
        }
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn active_location(&self) -> Option<&Location> {
        self.active.and_then(|index| self.locations.get(index))
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Append a location unless its city is already known. Returns whether
    /// the list changed. Entries are never mutated or removed.
    pub fn remember(&mut self, city: &str, country: &str) -> bool {
        let key = Location::key(city);
        if self.locations.iter().any(|l| Location::key(&l.city) == key) {
            return false;
        }

        self.locations.push(Location {
            city: city.to_string(),
            country: country.to_string(),
        });
        true
    }

    /// Move the active marker to the entry matching `city`, clearing it from
    /// every other entry. A city that is not in the list leaves no entry
    /// active.
    pub fn activate(&mut self, city: &str) {
        let key = Location::key(city);
        self.active = self
            .locations
            .iter()
            .position(|l| Location::key(&l.city) == key);
    }
}
