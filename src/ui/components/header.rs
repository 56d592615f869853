//! Header component renderer.

use crate::ui::helpers::{char_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar centered across `cols` and returns the next row.
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
///
/// When the width does not divide evenly the right side gets the extra space.
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = char_len(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    canvas.position_cursor(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.push(&Theme::bg(bg));
    }

    canvas.spaces(padding);
    canvas.push(&header.title);
    canvas.spaces(cols.saturating_sub(padding + title_len));

    canvas.push(Theme::reset());
    row + 1
}
