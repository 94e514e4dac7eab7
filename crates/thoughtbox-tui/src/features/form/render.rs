//! Field rendering.
//!
//! A field is a label row followed by a bordered text area whose height
//! comes from the [`HeightPresenter`], capped so the button stays on screen.
//! When content outgrows the cap the area scrolls to keep the cursor visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use thoughtbox_core::Field;
use unicode_width::UnicodeWidthStr;

use super::{HeightPresenter, TextBuffer, style};
use crate::common::text::{char_slice, wrap_ranges};

/// Label row above each text area.
const LABEL_HEIGHT: u16 = 1;

/// Top and bottom border rows.
const BORDER_ROWS: u16 = 2;

/// Left and right border columns.
const BORDER_COLS: u16 = 2;

/// Width available for text inside a field drawn `outer_width` wide.
pub fn inner_width(outer_width: u16) -> u16 {
    outer_width.saturating_sub(BORDER_COLS).max(1)
}

/// Total rows (label + borders + content) a field needs.
pub fn field_height(
    presenter: &dyn HeightPresenter,
    buffer: &TextBuffer,
    outer_width: u16,
    max_rows: u16,
) -> u16 {
    let rows = presenter
        .rows_for(&buffer.text(), inner_width(outer_width))
        .min(max_rows.max(1));
    LABEL_HEIGHT + BORDER_ROWS + rows
}

/// Wrapped visual rows of a buffer plus the cursor's visual (row, col).
struct WrappedText<'a> {
    rows: Vec<&'a str>,
    cursor: (usize, usize),
}

fn wrap_buffer(buffer: &TextBuffer, width: usize) -> WrappedText<'_> {
    let (cursor_row, cursor_col) = buffer.cursor();
    let mut rows = Vec::new();
    let mut cursor = (0, 0);

    for (row_idx, line) in buffer.lines().iter().enumerate() {
        let ranges = wrap_ranges(line, width);
        if row_idx == cursor_row {
            let (offset, (start, _)) = ranges
                .iter()
                .copied()
                .enumerate()
                .find(|(_, (_, end))| cursor_col < *end)
                .unwrap_or((ranges.len() - 1, ranges[ranges.len() - 1]));
            let col = char_slice(line, start, cursor_col).width();
            cursor = (rows.len() + offset, col.min(width.saturating_sub(1)));
        }
        rows.extend(
            ranges
                .into_iter()
                .map(|(start, end)| char_slice(line, start, end)),
        );
    }

    WrappedText { rows, cursor }
}

/// Draws the label and text area for one field into `area`.
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    buffer: &TextBuffer,
    focused: bool,
) {
    if area.height <= LABEL_HEIGHT {
        return;
    }

    let label_area = Rect {
        height: LABEL_HEIGHT,
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(field.label(), style::label()))),
        label_area,
    );

    let box_area = Rect {
        y: area.y + LABEL_HEIGHT,
        height: area.height - LABEL_HEIGHT,
        ..area
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(style::border(focused));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if buffer.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                field.placeholder(),
                style::placeholder(),
            ))),
            inner,
        );
        if focused {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let wrapped = wrap_buffer(buffer, usize::from(inner.width));
    let visible = usize::from(inner.height);
    let scroll = if focused && wrapped.cursor.0 >= visible {
        wrapped.cursor.0 + 1 - visible
    } else {
        0
    };

    let lines: Vec<Line> = wrapped
        .rows
        .iter()
        .skip(scroll)
        .take(visible)
        .map(|row| Line::raw(*row))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if focused {
        let (row, col) = wrapped.cursor;
        let x = inner.x + u16::try_from(col).unwrap_or(0);
        let y = inner.y + u16::try_from(row - scroll).unwrap_or(0);
        frame.set_cursor_position((x, y));
    }
}
