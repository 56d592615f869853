//! Search bar component renderer.

use crate::ui::helpers::{char_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box starting at `row` and returns the next row.
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// A focused box shows a trailing cursor block after the query; an unfocused
/// box is drawn dimmed to show the filter is still applied.
pub fn render_search_bar(canvas: &mut Canvas, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.text_dim
    };

    canvas.position_cursor(row, 1);
    canvas.spaces(SEARCH_BOX_MARGIN);
    canvas.push(&Theme::fg(border));
    canvas.push(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    let cursor = if search.is_focused { "█" } else { "" };
    let search_text: String = format!(" Search: {}{cursor}", search.query)
        .chars()
        .take(inner_width)
        .collect();
    let padding = inner_width.saturating_sub(char_len(&search_text));

    canvas.position_cursor(row + 1, 1);
    canvas.spaces(SEARCH_BOX_MARGIN);
    canvas.push(&Theme::fg(border));
    canvas.push("│");
    canvas.push(&Theme::fg(&theme.colors.text_normal));
    canvas.push(&search_text);
    canvas.spaces(padding);
    canvas.push(&Theme::fg(border));
    canvas.push("│");
    canvas.push(Theme::reset());

    canvas.position_cursor(row + 2, 1);
    canvas.spaces(SEARCH_BOX_MARGIN);
    canvas.push(&Theme::fg(border));
    canvas.push(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    row + 3
}
