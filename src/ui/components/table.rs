//! Item table renderer.
//!
//! Two columns: ID and NAME. The selected row is drawn with the selection
//! colors across the full width; other rows highlight search matches in the
//! name.

use crate::app::state::ID_COLUMN_WIDTH;
use crate::ui::helpers::{self, char_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders the ID and NAME column headers and returns the next row.
pub fn render_table_headers(canvas: &mut Canvas, row: usize, theme: &Theme) -> usize {
    canvas.position_cursor(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.header_fg));
    canvas.push(&format!("{:<width$}{}", "ID", "NAME", width = ID_COLUMN_WIDTH));
    canvas.push(Theme::reset());
    row + 1
}

/// Renders every row in `items` starting at `row` and returns the next row.
pub fn render_table_rows(canvas: &mut Canvas, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(canvas, current_row, item, theme, cols);
    }
    current_row
}

/// Renders one row, padded to `cols` so the selection background spans the line.
///
/// Styling precedence: selection colors, then match highlights, then normal text.
fn render_table_row(canvas: &mut Canvas, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    canvas.position_cursor(row, 1);

    if item.is_selected {
        canvas.push(&Theme::fg(&theme.colors.selection_fg));
        canvas.push(&Theme::bg(&theme.colors.selection_bg));
    } else {
        canvas.push(&Theme::fg(&theme.colors.id_fg));
    }

    let id_text = item.id.to_string();
    canvas.push(&id_text);
    canvas.spaces(ID_COLUMN_WIDTH.saturating_sub(char_len(&id_text)).max(1));

    if !item.is_selected {
        canvas.push(&Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(canvas, &item.name, &item.highlight_ranges, theme, item.is_selected);

    let line_len = char_len(&id_text).max(ID_COLUMN_WIDTH - 1) + 1 + char_len(&item.name);
    canvas.spaces(cols.saturating_sub(line_len));

    canvas.push(Theme::reset());
    row + 1
}
