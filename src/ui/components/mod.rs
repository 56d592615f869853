//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with item counts
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`form`]: Add and edit forms
//! - [`table`]: Item list with ID and NAME columns
//! - [`empty`]: "No items found" message
//!
//! [`render_frame`] stacks them top to bottom:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search bar - 3 lines, optional]
//! [Form - 2 + fields lines, optional]
//! [Table headers + rows | Empty state]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod form;
mod header;
mod search;
mod table;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal separator at `row` and returns the next row.
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.position_cursor(row, 1);
    canvas.push(&Theme::fg(color));
    canvas.push(&"─".repeat(cols));
    canvas.push(Theme::reset());
    row + 1
}

/// Draws a full frame for `vm` into `canvas`.
///
/// Reserves 6 lines of chrome (blank, header, two borders, table header,
/// footer) plus whatever the search bar and form take.
pub fn render_frame(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(canvas, current_row, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(canvas, current_row, search, theme, cols);
    }
    if let Some(form) = &vm.form {
        current_row = render_form(canvas, current_row, form, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(canvas, current_row, empty, theme, cols);
    } else {
        current_row = render_table_headers(canvas, current_row, theme);
        render_table_rows(canvas, current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows.saturating_sub(1).max(1);
    let border_row = footer_row.saturating_sub(1).max(1);

    render_border(canvas, border_row, &theme.colors.border, cols);
    render_footer(canvas, footer_row, &vm.footer, theme, cols);
}
