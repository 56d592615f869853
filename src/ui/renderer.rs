//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from [`AppState`], then
//! let the components draw it into a [`Canvas`].
//!
//! # Example
//!
//! ```rust
//! use listkeeper::app::AppState;
//! use listkeeper::ui::render_to_string;
//! use listkeeper::{ItemStore, Theme};
//!
//! let state = AppState::new(ItemStore::new(), Theme::default());
//! let frame = render_to_string(&state, 24, 80);
//! assert!(frame.contains("No items found"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::viewmodel::UIViewModel;

/// Renders the UI to stdout.
///
/// Does not clear the screen; the plugin host provides a fresh pane per frame.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders one frame into a string of text and ANSI escapes.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, state, rows, cols)
}

fn render_viewmodel(vm: &UIViewModel, state: &AppState, rows: usize, cols: usize) -> String {
    let mut canvas = Canvas::new();
    components::render_frame(&mut canvas, vm, &state.theme, cols, rows);
    canvas.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{process_event, Event};
    use crate::domain::Item;
    use crate::store::ItemStore;
    use crate::ui::Theme;

    fn state_with(items: &[(i64, &str)]) -> AppState {
        let mut store = ItemStore::new();
        for (id, name) in items {
            store.create(Item::new(*id, *name)).unwrap();
        }
        AppState::new(store, Theme::default())
    }

    #[test]
    fn frame_lists_items_with_ids() {
        let frame = render_to_string(&state_with(&[(1, "Apple"), (2, "Banana")]), 24, 80);
        assert!(frame.contains("Items (2)"));
        assert!(frame.contains("Apple"));
        assert!(frame.contains("Banana"));
        assert!(frame.contains("NAME"));
        assert!(!frame.contains("No items found"));
    }

    #[test]
    fn empty_filter_shows_no_items_found_instead_of_table() {
        let mut state = state_with(&[(1, "Apple")]);
        state.store.set_search_query("kiwi").unwrap();

        let frame = render_to_string(&state, 24, 80);

        assert!(frame.contains("No items found"));
        assert!(frame.contains("Search: kiwi"));
        assert!(!frame.contains("NAME"));
    }

    #[test]
    fn add_form_shows_the_draft() {
        let mut state = state_with(&[]);
        for event in [Event::StartAdd, Event::Char('P'), Event::Char('e')] {
            process_event(&mut state, &event).unwrap();
        }

        let frame = render_to_string(&state, 24, 80);

        assert!(frame.contains("Add item"));
        assert!(frame.contains("Pe"));
    }

    #[test]
    fn tiny_terminals_do_not_panic() {
        let state = state_with(&[(1, "Apple")]);
        let _ = render_to_string(&state, 1, 1);
        let _ = render_to_string(&state, 0, 0);
    }
}
