use thiserror::Error;

/// Hard capacity of the favorites list.
pub const MAX_FAVORITES: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FavoritesError {
    #[error("Exceeded 3 Cities! Please update or remove a City to change your favorite's list.")]
    LimitReached,
    #[error("Invalid city number.")]
    InvalidIndex,
}

/// Ordered in-memory list of favorite city names, capacity [`MAX_FAVORITES`].
///
/// All indices taken by this type are 1-based, matching what the menu shows
/// to the user, and are validated against the current length before any
/// mutation. A failed operation leaves the list untouched.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    cities: Vec<String>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    /// Append a city, returning the new list size.
    pub fn add(&mut self, city: impl Into<String>) -> Result<usize, FavoritesError> {
        if self.cities.len() == MAX_FAVORITES {
            return Err(FavoritesError::LimitReached);
        }

        self.cities.push(city.into());
        Ok(self.cities.len())
    }

    /// Replace the city at a 1-based position, keeping its slot.
    pub fn update(
        &mut self,
        index: usize,
        new_name: impl Into<String>,
    ) -> Result<(), FavoritesError> {
        let slot = self.check_index(index)?;
        self.cities[slot] = new_name.into();
        Ok(())
    }

    /// Remove the city at a 1-based position, returning its name.
    /// Later entries shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<String, FavoritesError> {
        let slot = self.check_index(index)?;
        Ok(self.cities.remove(slot))
    }

    /// Render the full listing the way the menu presents it.
    pub fn list(&self) -> String {
        if self.cities.is_empty() {
            return "No favorite cities yet! Please add a city to the list.".to_string();
        }

        let lines: Vec<String> = self
            .cities
            .iter()
            .enumerate()
            .map(|(i, city)| format!("{}: {city}", i + 1))
            .collect();

        format!("List of Favorite Cities:\n{}", lines.join("\n"))
    }

    /// Map a user-facing 1-based index to a vec slot.
    fn check_index(&self, index: usize) -> Result<usize, FavoritesError> {
        if (1..=self.cities.len()).contains(&index) {
            Ok(index - 1)
        } else {
            Err(FavoritesError::InvalidIndex)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_store() -> FavoritesStore {
        let mut store = FavoritesStore::new();
        for city in ["Paris", "Tokyo", "Rome"] {
            store.add(city).expect("store has room");
        }
        store
    }

    #[test]
    fn add_appends_at_last_position() {
        let mut store = FavoritesStore::new();

        assert_eq!(store.add("Paris"), Ok(1));
        assert_eq!(store.add("Tokyo"), Ok(2));

        assert_eq!(store.iter().last(), Some("Tokyo"));
        assert_eq!(store.list(), "List of Favorite Cities:\n1: Paris\n2: Tokyo");
    }

    #[test]
    fn fourth_add_is_rejected_without_mutation() {
        let mut store = full_store();

        assert_eq!(store.add("Berlin"), Err(FavoritesError::LimitReached));
        assert_eq!(store.len(), 3);
        assert_eq!(store.list(), "List of Favorite Cities:\n1: Paris\n2: Tokyo\n3: Rome");
    }

    #[test]
    fn limit_message_matches_menu_text() {
        assert_eq!(
            FavoritesError::LimitReached.to_string(),
            "Exceeded 3 Cities! Please update or remove a City to change your favorite's list."
        );
    }

    #[test]
    fn update_replaces_only_the_given_position() {
        let mut store = full_store();

        store.update(2, "Berlin").expect("index 2 is valid");

        assert_eq!(store.len(), 3);
        assert_eq!(store.iter().collect::<Vec<_>>(), ["Paris", "Berlin", "Rome"]);
    }

    #[test]
    fn remove_shifts_later_entries_down() {
        let mut store = full_store();

        let removed = store.remove(1).expect("index 1 is valid");

        assert_eq!(removed, "Paris");
        assert_eq!(store.len(), 2);
        assert_eq!(store.iter().collect::<Vec<_>>(), ["Tokyo", "Rome"]);
    }

    #[test]
    fn out_of_range_indices_leave_the_list_unchanged() {
        let mut store = full_store();

        for index in [0, 4, usize::MAX] {
            assert_eq!(store.update(index, "Berlin"), Err(FavoritesError::InvalidIndex));
            assert!(store.remove(index).is_err());
        }

        assert_eq!(store.iter().collect::<Vec<_>>(), ["Paris", "Tokyo", "Rome"]);
        assert_eq!(FavoritesError::InvalidIndex.to_string(), "Invalid city number.");
    }

    #[test]
    fn empty_store_lists_the_placeholder_message() {
        let store = FavoritesStore::new();

        assert_eq!(store.list(), "No favorite cities yet! Please add a city to the list.");
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut store = FavoritesStore::new();

        store.add("Paris").expect("store has room");
        store.add("Paris").expect("store has room");

        assert_eq!(store.iter().collect::<Vec<_>>(), ["Paris", "Paris"]);
    }
}
