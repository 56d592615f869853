//! Shared rendering utilities.
//!
//! Components draw into a [`Canvas`], a string buffer of text and ANSI escape
//! sequences. The renderer prints the finished buffer in one go.
//!
//! # Example
//!
//! ```rust
//! use listkeeper::ui::helpers::{render_highlighted_text, Canvas};
//! use listkeeper::Theme;
//!
//! let theme = Theme::default();
//! let mut canvas = Canvas::new();
//! canvas.position_cursor(1, 1);
//! render_highlighted_text(&mut canvas, "Banana", &[(1, 3)], &theme, false);
//! assert!(canvas.as_str().contains("an"));
//! ```

use crate::ui::theme::Theme;

/// Buffer collecting one frame of terminal output.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-indexed `row`/`col` using `ESC[{row};{col}H`.
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn spaces(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Display width of `text`, counted in characters.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Writes `text` with highlighted character ranges.
///
/// Ranges use character indices with exclusive ends and must be sorted and
/// non-overlapping. When `is_selected` is true the selection colors win and
/// the text is written plain.
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        canvas.push(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            canvas.push(&normal_section);
        }

        canvas.push(&Theme::fg(&theme.colors.match_highlight_fg));
        canvas.push(&Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        canvas.push(&highlighted_section);
        canvas.push(Theme::reset());
        canvas.push(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        canvas.push(&remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(raw: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in raw.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, c) if c.is_ascii_alphabetic() => in_escape = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }

    #[test]
    fn highlighted_text_keeps_every_character() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "Banana", &[(1, 3), (3, 5)], &theme, false);
        assert_eq!(strip_ansi(canvas.as_str()), "Banana");
        assert!(canvas.as_str().contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn selected_text_is_plain() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "Banana", &[(1, 3)], &theme, true);
        assert_eq!(canvas.as_str(), "Banana");
    }

    #[test]
    fn out_of_range_highlights_are_clamped() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "ab", &[(1, 9)], &theme, false);
        assert_eq!(strip_ansi(canvas.as_str()), "ab");
    }

    #[test]
    fn cursor_positioning_escape() {
        let mut canvas = Canvas::new();
        canvas.position_cursor(3, 7);
        canvas.spaces(2);
        assert_eq!(canvas.into_string(), "\u{1b}[3;7H  ");
    }
}
