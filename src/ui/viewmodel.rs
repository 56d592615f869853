//! View model types representing renderable UI state.
//!
//! View models are computed by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel) and
//! consumed by the renderer. They hold display-ready data only.

use crate::domain::ItemId;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the item table currently in view.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// Present while searching or while a filter is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Present while the add or edit form is open.
    pub form: Option<FormInfo>,

    /// Present when the filtered view is empty; replaces the table.
    pub empty_state: Option<EmptyState>,
}

/// One row of the item table.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub id: ItemId,

    /// Display name, possibly truncated.
    pub name: String,

    pub is_selected: bool,

    /// Character ranges of the name matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Shown in place of the table when no items are visible.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message, "No items found".
    pub message: String,

    /// Explains whether the list is empty or the filter excludes everything.
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,

    /// Whether keystrokes currently go to the search input.
    pub is_focused: bool,
}

/// Add or edit form.
#[derive(Debug, Clone)]
pub struct FormInfo {
    pub title: String,
    pub fields: Vec<FormFieldInfo>,
}

/// One labelled input of a form.
#[derive(Debug, Clone)]
pub struct FormFieldInfo {
    pub label: String,
    pub value: String,
    pub is_focused: bool,
}
