//! Event handling and state transition logic.
//!
//! [`handle_event`] turns presentation events into UI state changes and store
//! actions. It validates form input at the boundary: a rejected submission emits
//! nothing and leaves the form as typed. [`apply_actions`] then routes the
//! emitted [`Action::Dispatch`] values to the store in order.
//!
//! # Example
//!
//! ```rust
//! use listkeeper::app::{handle_event, apply_actions, AppState, Event};
//! use listkeeper::{ItemStore, Theme};
//!
//! let mut state = AppState::new(ItemStore::new(), Theme::default());
//! for event in [Event::StartAdd, Event::Char('h'), Event::Char('i'), Event::Submit] {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     apply_actions(&mut state, actions)?;
//! }
//! assert_eq!(state.store.items()[0].name, "hi");
//! # Ok::<(), listkeeper::ListkeeperError>(())
//! ```

use super::modes::{FormField, InputMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::validation::{parse_id, validate_name};
use crate::domain::{Item, ItemPatch};
use crate::store::ItemAction;

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (wraps to top).
    KeyDown,
    /// Moves the cursor up (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Opens the add form.
    StartAdd,
    /// Opens the edit form, prefilled from the selected item when there is one.
    StartEdit,
    /// Deletes every item sharing the selected item's id.
    DeleteSelected,
    /// Focuses the search input.
    SearchMode,
    /// Types a character into the focused input.
    Char(char),
    /// Removes the last character from the focused input.
    Backspace,
    /// Moves focus between the edit form's fields.
    SwitchField,
    /// Submits the open form, or leaves search keeping the filter.
    Submit,
    /// Cancels the open form, or leaves search clearing the filter.
    Escape,
}

/// Processes an event and returns whether to re-render plus the actions to run.
///
/// # Errors
///
/// The handler itself does not fail; the `Result` keeps the signature aligned
/// with [`apply_actions`] so both compose with `?`.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, mode = ?state.input_mode).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::StartAdd => {
            tracing::debug!("opening add form");
            state.add_draft.clear();
            state.input_mode = InputMode::Adding;
            Ok((true, vec![]))
        }
        Event::StartEdit => {
            let prefill = state
                .selected_item()
                .map(|item| (item.id.to_string(), item.name.clone()));

            if let Some((id, name)) = prefill {
                tracing::debug!(item_id = %id, "opening edit form for selection");
                state.edit_id_draft = id;
                state.edit_name_draft = name;
                state.input_mode = InputMode::Editing(FormField::Name);
            } else {
                tracing::debug!("opening empty edit form");
                state.edit_id_draft.clear();
                state.edit_name_draft.clear();
                state.input_mode = InputMode::Editing(FormField::Id);
            }
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.selected_item().map_or_else(
                || {
                    tracing::debug!("no item selected to delete");
                    Ok((false, vec![]))
                },
                |item| {
                    tracing::debug!(item_id = item.id, "deleting selected item");
                    Ok((true, vec![Action::Dispatch(ItemAction::delete(item.id))]))
                },
            )
        }
        Event::SearchMode => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode == InputMode::Search {
                let mut query = state.store.search_query().to_string();
                query.push(*c);
                tracing::trace!(query = %query, "search query typed");
                return Ok((true, vec![Action::Dispatch(ItemAction::set_search_query(query))]));
            }

            match state.active_draft_mut() {
                Some(draft) => {
                    draft.push(*c);
                    Ok((true, vec![]))
                }
                None => Ok((false, vec![])),
            }
        }
        Event::Backspace => {
            if state.input_mode == InputMode::Search {
                let mut query = state.store.search_query().to_string();
                if query.pop().is_none() {
                    return Ok((false, vec![]));
                }
                return Ok((true, vec![Action::Dispatch(ItemAction::set_search_query(query))]));
            }

            match state.active_draft_mut() {
                Some(draft) => Ok((draft.pop().is_some(), vec![])),
                None => Ok((false, vec![])),
            }
        }
        Event::SwitchField => {
            if let InputMode::Editing(field) = state.input_mode {
                state.input_mode = InputMode::Editing(field.toggled());
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::Submit => match state.input_mode {
            InputMode::Adding => Ok(submit_add(state)),
            InputMode::Editing(_) => Ok(submit_edit(state)),
            InputMode::Search => {
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode {
            InputMode::Search => {
                tracing::debug!(query = %state.store.search_query(), "leaving search");
                state.input_mode = InputMode::Normal;
                Ok((true, vec![Action::Dispatch(ItemAction::set_search_query(""))]))
            }
            InputMode::Adding | InputMode::Editing(_) => {
                state.reset_forms();
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
    }
}

/// Validates the add form and emits a create with a fresh id.
fn submit_add(state: &mut AppState) -> (bool, Vec<Action>) {
    let name = match validate_name(&state.add_draft) {
        Ok(name) => name,
        Err(e) => {
            tracing::debug!(error = %e, "add form rejected");
            return (false, vec![]);
        }
    };

    let id = state.ids.next_id();
    tracing::debug!(item_id = id, name = %name, "submitting new item");

    (true, vec![Action::Dispatch(ItemAction::create(Item::new(id, name)))])
}

/// Parses the edit form's id and emits a rename.
fn submit_edit(state: &AppState) -> (bool, Vec<Action>) {
    let id = match parse_id(&state.edit_id_draft) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(error = %e, "edit form rejected");
            return (false, vec![]);
        }
    };

    let patch = ItemPatch::rename(state.edit_name_draft.clone());
    tracing::debug!(item_id = id, "submitting item update");

    (true, vec![Action::Dispatch(ItemAction::update(id, patch))])
}

/// Routes dispatch actions to the store, in order, and returns the rest.
///
/// The selection is clamped after each store change. A form submission closes
/// the open form only once its create or update has been accepted; a rejected
/// dispatch leaves the form and its drafts as typed.
///
/// # Errors
///
/// Propagates [`ItemStore::dispatch`](crate::store::ItemStore::dispatch)
/// errors, which only occur in strict mode.
pub fn apply_actions(state: &mut AppState, actions: Vec<Action>) -> Result<Vec<Action>> {
    let mut runtime = Vec::new();
    for action in actions {
        match action {
            Action::Dispatch(item_action) => {
                let submits_form = state.input_mode.is_form()
                    && matches!(item_action, ItemAction::Create(_) | ItemAction::Update { .. });

                state.store.dispatch(item_action)?;

                if submits_form {
                    state.reset_forms();
                    state.input_mode = InputMode::Normal;
                }
                state.clamp_selection();
            }
            other => runtime.push(other),
        }
    }
    Ok(runtime)
}

/// Handles an event and applies its store actions in one step.
///
/// Returns the render flag and the remaining runtime actions.
///
/// # Errors
///
/// See [`apply_actions`].
pub fn process_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let (should_render, actions) = handle_event(state, event)?;
    let runtime = apply_actions(state, actions)?;
    Ok((should_render, runtime))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ListkeeperError;
    use crate::store::{ItemStore, StoreOptions};
    use crate::ui::Theme;

    fn app() -> AppState {
        AppState::new(ItemStore::new(), Theme::default())
    }

    fn feed(state: &mut AppState, events: &[Event]) {
        for event in events {
            process_event(state, event).unwrap();
        }
    }

    fn type_text(text: &str) -> Vec<Event> {
        text.chars().map(Event::Char).collect()
    }

    #[test]
    fn add_form_creates_trimmed_item() {
        let mut state = app();
        feed(&mut state, &[Event::StartAdd]);
        feed(&mut state, &type_text("  Apple  "));
        feed(&mut state, &[Event::Submit]);

        assert_eq!(state.store.items().len(), 1);
        assert_eq!(state.store.items()[0].name, "Apple");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.add_draft.is_empty());
    }

    #[test]
    fn blank_add_is_ignored_and_form_kept() {
        let mut state = app();
        feed(&mut state, &[Event::StartAdd]);
        feed(&mut state, &type_text("   "));

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Adding);
        assert_eq!(state.add_draft, "   ");
        assert!(state.store.items().is_empty());
    }

    #[test]
    fn added_items_get_increasing_ids() {
        let mut state = app();
        for name in ["one", "two"] {
            feed(&mut state, &[Event::StartAdd]);
            feed(&mut state, &type_text(name));
            feed(&mut state, &[Event::Submit]);
        }
        let items = state.store.items();
        assert!(items[1].id > items[0].id);
    }

    #[test]
    fn edit_prefills_from_selection_and_renames() {
        let mut state = app();
        state.store.create(Item::new(1, "X")).unwrap();

        feed(&mut state, &[Event::StartEdit]);
        assert_eq!(state.edit_id_draft, "1");
        assert_eq!(state.edit_name_draft, "X");
        assert_eq!(state.input_mode, InputMode::Editing(FormField::Name));

        feed(&mut state, &[Event::Backspace, Event::Char('Y'), Event::Submit]);

        assert_eq!(state.store.items(), &[Item::new(1, "Y")]);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn unparseable_id_is_ignored_and_form_kept() {
        let mut state = app();
        state.store.create(Item::new(1, "X")).unwrap();
        feed(&mut state, &[Event::StartEdit, Event::SwitchField]);
        feed(&mut state, &type_text("abc"));

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.edit_id_draft, "1abc");
        assert_eq!(state.input_mode, InputMode::Editing(FormField::Id));
        assert_eq!(state.store.items(), &[Item::new(1, "X")]);
    }

    #[test]
    fn edit_of_missing_id_is_a_quiet_no_op() {
        let mut state = app();
        state.store.create(Item::new(1, "X")).unwrap();
        state.store.set_search_query("nothing").unwrap();

        feed(&mut state, &[Event::StartEdit]);
        assert_eq!(state.input_mode, InputMode::Editing(FormField::Id));
        feed(&mut state, &type_text("99"));
        feed(&mut state, &[Event::SwitchField]);
        feed(&mut state, &type_text("Z"));
        feed(&mut state, &[Event::Submit]);

        assert_eq!(state.store.items(), &[Item::new(1, "X")]);
    }

    #[test]
    fn strict_store_surfaces_not_found() {
        let store = ItemStore::with_options(StoreOptions { strict: true });
        let mut state = AppState::new(store, Theme::default());
        feed(&mut state, &[Event::StartEdit]);
        feed(&mut state, &type_text("5"));
        feed(&mut state, &[Event::SwitchField, Event::Char('n')]);

        let err = process_event(&mut state, &Event::Submit).unwrap_err();
        assert!(matches!(err, ListkeeperError::NotFound { id: 5 }));

        assert_eq!(state.input_mode, InputMode::Editing(FormField::Name));
        assert_eq!(state.edit_id_draft, "5");
        assert_eq!(state.edit_name_draft, "n");
        assert!(state.store.items().is_empty());
    }

    #[test]
    fn submitted_form_stays_open_until_dispatched() {
        let mut state = app();
        feed(&mut state, &[Event::StartAdd]);
        feed(&mut state, &type_text("Pear"));

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(state.input_mode, InputMode::Adding);
        assert_eq!(state.add_draft, "Pear");

        apply_actions(&mut state, actions).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.add_draft.is_empty());
        assert_eq!(state.store.items()[0].name, "Pear");
    }

    #[test]
    fn typing_in_search_dispatches_each_keystroke() {
        let mut state = app();
        state.store.create(Item::new(1, "Apple")).unwrap();
        state.store.create(Item::new(2, "Banana")).unwrap();

        feed(&mut state, &[Event::SearchMode, Event::Char('a')]);
        let (_, actions) = handle_event(&mut state, &Event::Char('n')).unwrap();
        assert_eq!(
            actions,
            vec![Action::Dispatch(ItemAction::set_search_query("an"))]
        );
        apply_actions(&mut state, actions).unwrap();

        let visible: Vec<_> = state.store.filtered_items().iter().map(|i| i.id).collect();
        assert_eq!(visible, vec![2]);

        feed(&mut state, &[Event::Backspace]);
        assert_eq!(state.store.search_query(), "a");
    }

    #[test]
    fn enter_keeps_filter_escape_clears_it() {
        let mut state = app();
        feed(&mut state, &[Event::SearchMode, Event::Char('x'), Event::Submit]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.store.search_query(), "x");

        feed(&mut state, &[Event::SearchMode, Event::Escape]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.store.search_query(), "");
    }

    #[test]
    fn delete_selected_removes_duplicates_and_clamps() {
        let mut state = app();
        state.store.create(Item::new(1, "A")).unwrap();
        state.store.create(Item::new(2, "B")).unwrap();
        state.store.create(Item::new(2, "C")).unwrap();
        state.selected_index = 2;

        feed(&mut state, &[Event::DeleteSelected]);

        assert_eq!(state.store.items(), &[Item::new(1, "A")]);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn delete_needs_normal_mode_and_a_selection() {
        let mut state = app();
        let (render, actions) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        state.store.create(Item::new(1, "A")).unwrap();
        feed(&mut state, &[Event::SearchMode]);
        let (_, actions) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn escape_discards_form_drafts() {
        let mut state = app();
        feed(&mut state, &[Event::StartAdd]);
        feed(&mut state, &type_text("draft"));
        feed(&mut state, &[Event::Escape]);

        assert!(state.add_draft.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.store.items().is_empty());
    }

    #[test]
    fn close_focus_is_left_for_the_runtime() {
        let mut state = app();
        let (render, runtime) = process_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(runtime, vec![Action::CloseFocus]);
    }

    #[test]
    fn chars_in_normal_mode_do_nothing() {
        let mut state = app();
        let (render, actions) = handle_event(&mut state, &Event::Char('z')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }
}
