//! Application state and view model computation.
//!
//! [`AppState`] wraps the injected [`ItemStore`] with presentation-only state:
//! the input mode, form drafts, the selection cursor and the id generator. The
//! store stays the single source of truth for items and the search query; the
//! selection indexes into the store's filtered view, which is recomputed on
//! every read.
//!
//! # Example
//!
//! ```rust
//! use listkeeper::app::AppState;
//! use listkeeper::{Item, ItemStore, Theme};
//!
//! let mut store = ItemStore::new();
//! store.create(Item::new(1, "Apple"))?;
//! let state = AppState::new(store, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.display_items.len(), 1);
//! # Ok::<(), listkeeper::ListkeeperError>(())
//! ```

use super::ids::IdGenerator;
use super::modes::{FormField, InputMode};
use crate::domain::Item;
use crate::store::ItemStore;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, FormFieldInfo, FormInfo, HeaderInfo, SearchBarInfo,
    UIViewModel,
};

/// Width of the ID column, including the gap before NAME.
pub const ID_COLUMN_WIDTH: usize = 16;

/// Longest name shown before truncation with an ellipsis.
const MAX_NAME_CHARS: usize = 60;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Item store owning the list and the search query.
    pub store: ItemStore,

    /// Zero-based index into the store's filtered view.
    ///
    /// Clamped by [`AppState::clamp_selection`] after every dispatched action.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Name typed into the add form.
    pub add_draft: String,

    /// Id typed into the edit form.
    pub edit_id_draft: String,

    /// Name typed into the edit form.
    pub edit_name_draft: String,

    /// Id source for newly added items.
    pub ids: IdGenerator,

    pub theme: Theme,
}

impl AppState {
    /// Creates application state around an existing store.
    #[must_use]
    pub fn new(store: ItemStore, theme: Theme) -> Self {
        Self {
            store,
            selected_index: 0,
            input_mode: InputMode::Normal,
            add_draft: String::new(),
            edit_id_draft: String::new(),
            edit_name_draft: String::new(),
            ids: IdGenerator::new(),
            theme,
        }
    }

    /// Moves the cursor down, wrapping to the top. No-op on an empty view.
    pub fn move_selection_down(&mut self) {
        let len = self.store.filtered_items().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up, wrapping to the bottom. No-op on an empty view.
    pub fn move_selection_up(&mut self) {
        let len = self.store.filtered_items().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// The item under the cursor in the filtered view.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.store.filtered_items().get(self.selected_index).copied()
    }

    /// Keeps the cursor inside the filtered view.
    pub fn clamp_selection(&mut self) {
        let len = self.store.filtered_items().len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    /// Clears every form draft.
    pub fn reset_forms(&mut self) {
        self.add_draft.clear();
        self.edit_id_draft.clear();
        self.edit_name_draft.clear();
    }

    /// The draft buffer receiving typed characters in the current mode.
    pub fn active_draft_mut(&mut self) -> Option<&mut String> {
        match self.input_mode {
            InputMode::Adding => Some(&mut self.add_draft),
            InputMode::Editing(FormField::Id) => Some(&mut self.edit_id_draft),
            InputMode::Editing(FormField::Name) => Some(&mut self.edit_name_draft),
            InputMode::Normal | InputMode::Search => None,
        }
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    ///
    /// The filtered view is windowed around the selection. When it is empty the
    /// view model carries an [`EmptyState`] instead of rows.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let filtered = self.store.filtered_items();

        let mut viewmodel = UIViewModel {
            display_items: vec![],
            selected_index: 0,
            header: self.compute_header(filtered.len()),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            form: self.compute_form(),
            empty_state: None,
        };

        if filtered.is_empty() {
            viewmodel.empty_state = Some(self.compute_empty_state());
            return viewmodel;
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let selected = self.selected_index.min(filtered.len() - 1);
        let mut visible_start = selected.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(filtered.len());

        if visible_end - visible_start < available_rows && filtered.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = self.store.search_query();
        let name_width = cols.saturating_sub(ID_COLUMN_WIDTH).min(MAX_NAME_CHARS);

        viewmodel.display_items = filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                let absolute_idx = visible_start + relative_idx;
                Self::compute_display_item(item, absolute_idx == selected, name_width, query)
            })
            .collect();
        viewmodel.selected_index = selected.saturating_sub(visible_start);

        viewmodel
    }

    fn compute_display_item(
        item: &Item,
        is_selected: bool,
        name_width: usize,
        query: &str,
    ) -> DisplayItem {
        let name = truncate_chars(&item.name, name_width);
        let highlight_ranges = compute_highlight_ranges(&name, query);

        DisplayItem {
            id: item.id,
            name,
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self, visible: usize) -> HeaderInfo {
        let total = self.store.items().len();
        let title = if visible == total {
            format!(" Items ({total}) ")
        } else {
            format!(" Items ({visible} of {total}) ")
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: navigate  a: add  e: edit  d: delete  /: search  q: quit"
            }
            InputMode::Search => "Type to filter  Enter: keep filter  ESC: clear search",
            InputMode::Adding => "Type a name  Enter: add  ESC: cancel",
            InputMode::Editing(_) => "Tab: switch field  Enter: update  ESC: cancel",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// The search bar shows while searching and whenever a filter is active.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let query = self.store.search_query();
        if self.input_mode == InputMode::Search || !query.is_empty() {
            Some(SearchBarInfo {
                query: query.to_string(),
                is_focused: self.input_mode == InputMode::Search,
            })
        } else {
            None
        }
    }

    fn compute_form(&self) -> Option<FormInfo> {
        match self.input_mode {
            InputMode::Adding => Some(FormInfo {
                title: "Add item".to_string(),
                fields: vec![FormFieldInfo {
                    label: "Name".to_string(),
                    value: self.add_draft.clone(),
                    is_focused: true,
                }],
            }),
            InputMode::Editing(focus) => Some(FormInfo {
                title: "Edit item".to_string(),
                fields: vec![
                    FormFieldInfo {
                        label: "Id".to_string(),
                        value: self.edit_id_draft.clone(),
                        is_focused: focus == FormField::Id,
                    },
                    FormFieldInfo {
                        label: "Name".to_string(),
                        value: self.edit_name_draft.clone(),
                        is_focused: focus == FormField::Name,
                    },
                ],
            }),
            InputMode::Normal | InputMode::Search => None,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        let subtitle = if self.store.items().is_empty() {
            "Press 'a' to add the first item".to_string()
        } else {
            format!("Nothing matches \"{}\"", self.store.search_query())
        };
        EmptyState {
            message: "No items found".to_string(),
            subtitle,
        }
    }

    /// Rows left for the table after header, borders, footer and open panels.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let search_rows = if self.compute_search_bar().is_some() { 3 } else { 0 };
        let form_rows = match self.input_mode {
            InputMode::Adding => 3,
            InputMode::Editing(_) => 4,
            InputMode::Normal | InputMode::Search => 0,
        };
        total_rows.saturating_sub(6 + search_rows + form_rows)
    }
}

/// Shortens `text` to `max_chars` characters, ending in "..." when cut.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut short: String = text.chars().take(keep).collect();
    short.push_str("...");
    short
}

/// Character ranges of case-insensitive, non-overlapping `query` matches in `text`.
///
/// Matching uses the same whole-string lowercase fold as the store's filter.
/// Ranges are `(start, end)` character indices of `text` with exclusive end.
#[must_use]
pub fn compute_highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let folded = text.to_lowercase();
    let needle = query.to_lowercase();

    // Byte offset in `folded` at which each character of `text` ends.
    let mut fold_ends = Vec::with_capacity(text.len());
    let mut offset = 0;
    for c in text.chars() {
        offset += c.to_lowercase().map(char::len_utf8).sum::<usize>();
        fold_ends.push(offset);
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for (byte_start, matched) in folded.match_indices(needle.as_str()) {
        let byte_end = byte_start + matched.len();
        let start = fold_ends.partition_point(|&end| end <= byte_start);
        let end = (fold_ends.partition_point(|&end| end < byte_end) + 1).min(fold_ends.len());

        if let Some(last) = ranges.last_mut().filter(|last| start < last.1) {
            last.1 = last.1.max(end);
        } else {
            ranges.push((start, end));
        }
    }
    ranges
}
