//! Line-based text buffer backing each form field.
//!
//! Cursor positions are (row, col) in char units. The buffer always holds at
//! least one line.

/// Cursor movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Forward,
    Back,
    Head,
    End,
}

#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
        }
    }
}

impl TextBuffer {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Full content with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn on_first_row(&self) -> bool {
        self.cursor_row == 0
    }

    pub fn on_last_row(&self) -> bool {
        self.cursor_row + 1 >= self.lines.len()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Inserts a string at the cursor, advancing the cursor past it.
    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let row = self.cursor_row;
        let current = std::mem::take(&mut self.lines[row]);
        let split = char_to_byte_index(&current, self.cursor_col);
        let (prefix, suffix) = current.split_at(split);

        let parts: Vec<&str> = text.split('\n').collect();
        let last = parts.len() - 1;
        let mut new_lines: Vec<String> = parts.iter().map(|part| (*part).to_string()).collect();
        new_lines[0].insert_str(0, prefix);
        let cursor_col = new_lines[last].chars().count();
        new_lines[last].push_str(suffix);

        self.lines.splice(row..=row, new_lines);
        self.cursor_row = row + last;
        self.cursor_col = cursor_col;
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    pub fn insert_newline(&mut self) {
        self.insert_str("\n");
    }

    /// Backspace semantics: joins with the previous line at column 0.
    pub fn delete_prev_char(&mut self) {
        if self.cursor_col > 0 {
            let col = self.cursor_col - 1;
            remove_char(&mut self.lines[self.cursor_row], col);
            self.cursor_col = col;
            return;
        }

        if self.cursor_row == 0 {
            return;
        }

        let current = self.lines.remove(self.cursor_row);
        self.cursor_row -= 1;
        let line = &mut self.lines[self.cursor_row];
        self.cursor_col = line.chars().count();
        line.push_str(&current);
    }

    /// Delete semantics: joins with the next line at end of line.
    pub fn delete_next_char(&mut self) {
        let row = self.cursor_row;
        if self.cursor_col < self.lines[row].chars().count() {
            remove_char(&mut self.lines[row], self.cursor_col);
        } else if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].push_str(&next);
        }
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let line_len = |buffer: &Self, row: usize| buffer.lines[row].chars().count();
        match movement {
            CursorMove::Up => {
                if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = self.cursor_col.min(line_len(self, self.cursor_row));
                }
            }
            CursorMove::Down => {
                if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.cursor_col = self.cursor_col.min(line_len(self, self.cursor_row));
                }
            }
            CursorMove::Forward => {
                if self.cursor_col < line_len(self, self.cursor_row) {
                    self.cursor_col += 1;
                } else if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.cursor_col = 0;
                }
            }
            CursorMove::Back => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = line_len(self, self.cursor_row);
                }
            }
            CursorMove::Head => self.cursor_col = 0,
            CursorMove::End => self.cursor_col = line_len(self, self.cursor_row),
        }
    }
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(idx, _)| idx)
}

fn remove_char(line: &mut String, col: usize) {
    let start = char_to_byte_index(line, col);
    let end = char_to_byte_index(line, col + 1);
    line.replace_range(start..end, "");
}
