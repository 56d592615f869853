//! Item store state and the derived search view.

use crate::domain::Item;
use serde::{Deserialize, Serialize};

/// Complete state held by the item store.
///
/// `items` keeps append order; removals preserve the relative order of the
/// remaining records. `search_query` is free text and the empty string matches
/// every item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemState {
    pub items: Vec<Item>,
    pub search_query: String,
}

impl ItemState {
    /// Computes the items whose name contains the search query, ignoring case.
    ///
    /// Both strings are folded with `to_lowercase` before a substring test. The
    /// result is rebuilt on every call and keeps the order of `items`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use listkeeper::{Item, ItemState};
    ///
    /// let state = ItemState {
    ///     items: vec![Item::new(1, "Apple"), Item::new(2, "Banana")],
    ///     search_query: "AN".to_string(),
    /// };
    /// let names: Vec<&str> = state.filtered_items().into_iter().map(|i| i.name.as_str()).collect();
    /// assert_eq!(names, ["Banana"]);
    /// ```
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&Item> {
        let folded = self.search_query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name_contains_folded(&folded))
            .collect()
    }

    /// Position of the first item carrying `id`.
    #[must_use]
    pub fn position_of(&self, id: crate::domain::ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> ItemState {
        ItemState {
            items: vec![
                Item::new(1, "Apple"),
                Item::new(2, "Banana"),
                Item::new(3, "Pineapple"),
            ],
            search_query: String::new(),
        }
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let state = fruit();
        let ids: Vec<_> = state.filtered_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn query_matches_substrings_case_insensitively() {
        let mut state = fruit();
        state.search_query = "APPLE".to_string();
        let ids: Vec<_> = state.filtered_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let mut state = fruit();
        state.search_query = " apple".to_string();
        assert!(state.filtered_items().is_empty());
    }

    #[test]
    fn repeated_reads_agree() {
        let mut state = fruit();
        state.search_query = "an".to_string();
        assert_eq!(state.filtered_items(), state.filtered_items());
    }

    #[test]
    fn position_of_finds_first_duplicate() {
        let mut state = fruit();
        state.items.push(Item::new(2, "Second banana"));
        assert_eq!(state.position_of(2), Some(1));
        assert_eq!(state.position_of(9), None);
    }
}
