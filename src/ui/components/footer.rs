//! Footer component renderer.

use crate::ui::helpers::{char_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints, centered and dimmed, and returns the next row.
///
/// Text wider than the terminal is cut to fit so it never wraps.
pub fn render_footer(canvas: &mut Canvas, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text: String = footer.keybindings.chars().take(cols).collect();
    let text_len = char_len(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    canvas.position_cursor(row, 1);
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.spaces(padding);
    canvas.push(&help_text);
    canvas.spaces(cols.saturating_sub(padding + text_len));
    canvas.push(Theme::reset());
    row + 1
}
