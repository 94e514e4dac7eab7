//! Field editing reducer.
//!
//! Translates key and paste events into buffer edits for the focused field.
//! Focus changes, submission and cancellation are decided by the top-level
//! reducer from the returned [`FieldKey`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{CursorMove, TextBuffer};
use crate::common::sanitize_paste;

/// What a key did to the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    /// Content changed; the form state must be re-synced.
    Edited,
    /// Only the cursor moved.
    Moved,
    /// Up arrow on the first row.
    LeaveUp,
    /// Down arrow on the last row.
    LeaveDown,
    /// Not an editing key.
    Ignored,
}

pub fn handle_field_key(buffer: &mut TextBuffer, key: KeyEvent) -> FieldKey {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter => {
            buffer.insert_newline();
            FieldKey::Edited
        }
        KeyCode::Backspace => {
            buffer.delete_prev_char();
            FieldKey::Edited
        }
        KeyCode::Delete => {
            buffer.delete_next_char();
            FieldKey::Edited
        }
        KeyCode::Left => move_cursor(buffer, CursorMove::Back),
        KeyCode::Right => move_cursor(buffer, CursorMove::Forward),
        KeyCode::Home => move_cursor(buffer, CursorMove::Head),
        KeyCode::End => move_cursor(buffer, CursorMove::End),
        KeyCode::Up if buffer.on_first_row() => FieldKey::LeaveUp,
        KeyCode::Up => move_cursor(buffer, CursorMove::Up),
        KeyCode::Down if buffer.on_last_row() => FieldKey::LeaveDown,
        KeyCode::Down => move_cursor(buffer, CursorMove::Down),
        KeyCode::Char('u') if ctrl => {
            buffer.clear();
            FieldKey::Edited
        }
        KeyCode::Char('a') if ctrl => move_cursor(buffer, CursorMove::Head),
        KeyCode::Char('e') if ctrl => move_cursor(buffer, CursorMove::End),
        KeyCode::Char(ch) if !ctrl && !alt => {
            buffer.insert_char(ch);
            FieldKey::Edited
        }
        _ => FieldKey::Ignored,
    }
}

/// Inserts pasted text at the cursor. Returns false if nothing was inserted.
pub fn handle_paste(buffer: &mut TextBuffer, text: &str) -> bool {
    let sanitized = sanitize_paste(text);
    if sanitized.is_empty() {
        return false;
    }
    buffer.insert_str(&sanitized);
    true
}

fn move_cursor(buffer: &mut TextBuffer, movement: CursorMove) -> FieldKey {
    buffer.move_cursor(movement);
    FieldKey::Moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_and_enter_edit_buffer() {
        let mut buffer = TextBuffer::default();
        assert_eq!(handle_field_key(&mut buffer, key(KeyCode::Char('h'))), FieldKey::Edited);
        assert_eq!(handle_field_key(&mut buffer, key(KeyCode::Enter)), FieldKey::Edited);
        assert_eq!(
            handle_field_key(
                &mut buffer,
                KeyEvent::new(KeyCode::Char('I'), KeyModifiers::SHIFT)
            ),
            FieldKey::Edited
        );
        assert_eq!(buffer.text(), "h\nI");
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut buffer = TextBuffer::default();
        assert_eq!(handle_field_key(&mut buffer, ctrl('x')), FieldKey::Ignored);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_ctrl_u_clears_field() {
        let mut buffer = TextBuffer::default();
        buffer.insert_str("line\nline");
        assert_eq!(handle_field_key(&mut buffer, ctrl('u')), FieldKey::Edited);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_arrows_leave_at_edges() {
        let mut buffer = TextBuffer::default();
        buffer.insert_str("a\nb");
        assert_eq!(handle_field_key(&mut buffer, key(KeyCode::Down)), FieldKey::LeaveDown);
        assert_eq!(handle_field_key(&mut buffer, key(KeyCode::Up)), FieldKey::Moved);
        assert_eq!(handle_field_key(&mut buffer, key(KeyCode::Up)), FieldKey::LeaveUp);
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut buffer = TextBuffer::default();
        assert!(handle_paste(&mut buffer, "one\r\ntwo"));
        assert_eq!(buffer.lines(), ["one", "two"]);
        assert!(!handle_paste(&mut buffer, ""));
    }
}
