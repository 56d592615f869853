//! Empty state component renderer.

use crate::ui::helpers::{char_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered "No items found" message and its subtitle.
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Starts one row below `row` and returns the row after the subtitle.
pub fn render_empty_state(canvas: &mut Canvas, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_row = row + 1;
    let msg_len = char_len(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    canvas.position_cursor(msg_row, 1);
    canvas.push(&Theme::fg(&theme.colors.empty_state_fg));
    canvas.spaces(msg_padding);
    canvas.push(&empty.message);
    canvas.spaces(cols.saturating_sub(msg_padding + msg_len));
    canvas.push(Theme::reset());

    let sub_len = char_len(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    canvas.position_cursor(msg_row + 1, 1);
    canvas.push(Theme::dim());
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.spaces(sub_padding);
    canvas.push(&empty.subtitle);
    canvas.spaces(cols.saturating_sub(sub_padding + sub_len));
    canvas.push(Theme::reset());

    msg_row + 2
}
