//! Add and edit form renderer.
//!
//! Draws a framed box with the form title in the top border and one line per
//! field. The focused field is marked with a `>` and a cursor block.

use crate::ui::helpers::{char_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormInfo;

const FORM_MARGIN: usize = 5;
const LABEL_WIDTH: usize = 6;

/// Renders `form` at `row` and returns the next free row.
///
/// Uses two border lines plus one line per field.
pub fn render_form(canvas: &mut Canvas, row: usize, form: &FormInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(FORM_MARGIN * 2).saturating_sub(2);
    let border = Theme::fg(&theme.colors.form_border);

    let title: String = format!(" {} ", form.title).chars().take(inner_width).collect();
    canvas.position_cursor(row, 1);
    canvas.spaces(FORM_MARGIN);
    canvas.push(&border);
    canvas.push("┌");
    canvas.push(Theme::bold());
    canvas.push(&title);
    canvas.push(Theme::reset());
    canvas.push(&border);
    canvas.push(&"─".repeat(inner_width.saturating_sub(char_len(&title))));
    canvas.push("┐");
    canvas.push(Theme::reset());

    let mut current_row = row + 1;
    for field in &form.fields {
        let marker = if field.is_focused { ">" } else { " " };
        let cursor = if field.is_focused { "█" } else { "" };
        let line: String = format!(
            "{marker} {:<width$} {}{cursor}",
            format!("{}:", field.label),
            field.value,
            width = LABEL_WIDTH
        )
        .chars()
        .take(inner_width)
        .collect();

        canvas.position_cursor(current_row, 1);
        canvas.spaces(FORM_MARGIN);
        canvas.push(&border);
        canvas.push("│");
        if field.is_focused {
            canvas.push(&Theme::fg(&theme.colors.text_normal));
        } else {
            canvas.push(&Theme::fg(&theme.colors.text_dim));
        }
        canvas.push(&line);
        canvas.spaces(inner_width.saturating_sub(char_len(&line)));
        canvas.push(&border);
        canvas.push("│");
        canvas.push(Theme::reset());
        current_row += 1;
    }

    canvas.position_cursor(current_row, 1);
    canvas.spaces(FORM_MARGIN);
    canvas.push(&border);
    canvas.push(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    current_row + 1
}
