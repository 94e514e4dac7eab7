//! Text area sizing.
//!
//! Each field's text area is as tall as its wrapped content. The renderer
//! asks a [`HeightPresenter`] for the row count every frame, so tests and
//! non-interactive environments can swap in [`FixedRows`].

use crate::common::text::wrapped_row_count;

/// Decides how many content rows a text area shows.
pub trait HeightPresenter {
    /// Rows needed for `content` when wrapped at `width` columns.
    fn rows_for(&self, content: &str, width: u16) -> u16;
}

/// Grows with content: one row per wrapped visual line, never less than one.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoGrow;

impl HeightPresenter for AutoGrow {
    fn rows_for(&self, content: &str, width: u16) -> u16 {
        let rows: usize = content
            .split('\n')
            .map(|line| wrapped_row_count(line, usize::from(width)))
            .sum();
        u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
    }
}

/// Ignores content and always reports the same height.
#[derive(Debug, Clone, Copy)]
pub struct FixedRows(pub u16);

impl HeightPresenter for FixedRows {
    fn rows_for(&self, _content: &str, _width: u16) -> u16 {
        self.0.max(1)
    }
}

/// Largest number of content rows a field may take on a screen of `height`.
pub fn max_rows_for_screen(height: u16, percent: u16) -> u16 {
    let percent = u32::from(percent.clamp(1, 100));
    let rows = u32::from(height) * percent / 100;
    u16::try_from(rows).unwrap_or(u16::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_is_one_row() {
        assert_eq!(AutoGrow.rows_for("", 20), 1);
    }

    #[test]
    fn test_rows_follow_newlines_and_wrapping() {
        assert_eq!(AutoGrow.rows_for("a\nb\nc", 20), 3);
        assert_eq!(AutoGrow.rows_for("abcdefghij", 4), 3);
        assert_eq!(AutoGrow.rows_for("abcd\n", 4), 2);
    }

    #[test]
    fn test_fixed_rows_ignores_content() {
        assert_eq!(FixedRows(2).rows_for("a\nb\nc\nd", 10), 2);
        assert_eq!(FixedRows(0).rows_for("", 10), 1);
    }

    #[test]
    fn test_max_rows_for_screen() {
        assert_eq!(max_rows_for_screen(40, 25), 10);
        assert_eq!(max_rows_for_screen(3, 25), 1);
        assert_eq!(max_rows_for_screen(40, 500), 40);
    }
}
