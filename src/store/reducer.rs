//! The pure reducer applying [`ItemAction`]s to [`ItemState`].
//!
//! `reduce` never fails. Unmatched ids leave the state untouched and report
//! [`Outcome::NoMatch`] so that a caller can decide whether that matters.

use super::actions::ItemAction;
use super::state::ItemState;

/// Result of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The state was replaced.
    Applied,
    /// An update or delete found no record with the requested id.
    NoMatch,
}

impl Outcome {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Applies `action` to `state`.
///
/// - `Create` appends.
/// - `Update` merges into the first matching record only.
/// - `Delete` removes every matching record, keeping the order of the rest.
/// - `SetSearchQuery` replaces the query as given.
///
/// # Example
///
/// ```rust
/// use listkeeper::store::{reduce, ItemAction, ItemState, Outcome};
/// use listkeeper::{Item, ItemPatch};
///
/// let mut state = ItemState::default();
/// reduce(&mut state, &ItemAction::create(Item::new(1, "X")));
/// assert_eq!(reduce(&mut state, &ItemAction::update(99, ItemPatch::rename("Z"))), Outcome::NoMatch);
/// assert_eq!(state.items, vec![Item::new(1, "X")]);
/// ```
pub fn reduce(state: &mut ItemState, action: &ItemAction) -> Outcome {
    match action {
        ItemAction::Create(item) => {
            state.items.push(item.clone());
            Outcome::Applied
        }
        ItemAction::Update { id, patch } => {
            let Some(index) = state.position_of(*id) else {
                return Outcome::NoMatch;
            };
            let merged = state.items[index].merged(patch);
            state.items[index] = merged;
            Outcome::Applied
        }
        ItemAction::Delete { id } => {
            let before = state.items.len();
            state.items.retain(|item| item.id != *id);
            if state.items.len() == before {
                Outcome::NoMatch
            } else {
                Outcome::Applied
            }
        }
        ItemAction::SetSearchQuery { query } => {
            state.search_query.clone_from(query);
            Outcome::Applied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, ItemPatch};

    fn run(actions: &[ItemAction]) -> ItemState {
        let mut state = ItemState::default();
        for action in actions {
            reduce(&mut state, action);
        }
        state
    }

    #[test]
    fn creates_append_in_call_order() {
        let state = run(&[
            ItemAction::create(Item::new(1, "first")),
            ItemAction::create(Item::new(2, "second")),
        ]);
        assert_eq!(state.items, vec![Item::new(1, "first"), Item::new(2, "second")]);
    }

    #[test]
    fn update_touches_only_the_matched_record() {
        let mut state = run(&[
            ItemAction::create(Item::new(1, "a").with_field("tag", "keep")),
            ItemAction::create(Item::new(2, "b")),
            ItemAction::create(Item::new(3, "c")),
        ]);

        let outcome = reduce(&mut state, &ItemAction::update(2, ItemPatch::rename("B")));

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(
            state.items,
            vec![
                Item::new(1, "a").with_field("tag", "keep"),
                Item::new(2, "B"),
                Item::new(3, "c"),
            ]
        );
    }

    #[test]
    fn update_with_duplicates_changes_first_only() {
        let mut state = run(&[
            ItemAction::create(Item::new(1, "A")),
            ItemAction::create(Item::new(1, "B")),
        ]);
        reduce(&mut state, &ItemAction::update(1, ItemPatch::rename("Z")));
        assert_eq!(state.items, vec![Item::new(1, "Z"), Item::new(1, "B")]);
    }

    #[test]
    fn unmatched_update_is_a_no_op() {
        let mut state = run(&[ItemAction::create(Item::new(1, "X"))]);
        let before = state.clone();

        let outcome = reduce(&mut state, &ItemAction::update(99, ItemPatch::rename("Z")));

        assert_eq!(outcome, Outcome::NoMatch);
        assert_eq!(state, before);
    }

    #[test]
    fn delete_removes_all_matches_and_keeps_order() {
        let mut state = run(&[
            ItemAction::create(Item::new(1, "a")),
            ItemAction::create(Item::new(2, "b")),
            ItemAction::create(Item::new(1, "c")),
            ItemAction::create(Item::new(3, "d")),
        ]);

        assert_eq!(reduce(&mut state, &ItemAction::delete(1)), Outcome::Applied);
        assert_eq!(state.items, vec![Item::new(2, "b"), Item::new(3, "d")]);
    }

    #[test]
    fn unmatched_delete_is_a_no_op() {
        let mut state = run(&[ItemAction::create(Item::new(1, "a"))]);
        let before = state.clone();
        assert_eq!(reduce(&mut state, &ItemAction::delete(7)), Outcome::NoMatch);
        assert_eq!(state, before);
    }

    #[test]
    fn search_query_is_stored_verbatim() {
        let state = run(&[ItemAction::set_search_query("  Mixed Case ")]);
        assert_eq!(state.search_query, "  Mixed Case ");

        let state = run(&[
            ItemAction::set_search_query("x"),
            ItemAction::set_search_query(""),
        ]);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn rename_then_unmatched_update() {
        let state = run(&[
            ItemAction::create(Item::new(1, "X")),
            ItemAction::update(1, ItemPatch::rename("Y")),
            ItemAction::update(99, ItemPatch::rename("Z")),
        ]);
        assert_eq!(state.items, vec![Item::new(1, "Y")]);
    }

    #[test]
    fn duplicate_ids_are_all_deleted() {
        let state = run(&[
            ItemAction::create(Item::new(1, "A")),
            ItemAction::create(Item::new(1, "B")),
            ItemAction::delete(1),
        ]);
        assert!(state.items.is_empty());
    }
}
