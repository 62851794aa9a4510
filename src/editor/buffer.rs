use ropey::Rope;

/// Cursor position in the buffer.
///
/// Columns are counted in characters, not bytes, so multi-byte text needs
/// no special casing in movement or rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (character offset within the line).
    pub col: usize,
    /// Remembered column for vertical movement (sticky column).
    sticky_col: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn origin() -> Self {
        Self {
            line: 0,
            col: 0,
            sticky_col: 0,
        }
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            sticky_col: col,
        }
    }

    /// Update column and reset the sticky column to match.
    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.sticky_col = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::origin()
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A text buffer backed by a rope.
///
/// Any mutation marks the buffer dirty; [`TextBuffer::mark_clean`] is
/// called after a successful save. Dirtiness becomes true through edits
/// and nothing else.
pub struct TextBuffer {
    rope: Rope,
    cursor: Cursor,
    dirty: bool,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create a buffer holding `text`, clean, with the cursor at the origin.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::origin(),
            dirty: false,
        }
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The content of a line, without its trailing line break.
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx >= self.rope.len_lines() {
            return None;
        }
        let raw = self.rope.line(idx).to_string();
        Some(
            raw.trim_end_matches('\n')
                .trim_end_matches('\r')
                .to_string(),
        )
    }

    /// Length of a line in characters, excluding its trailing line break.
    pub fn line_len(&self, idx: usize) -> usize {
        if idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(idx);
        let mut len = line.len_chars();
        let mut rev = line.chars_at(len);
        while let Some(c) = rev.prev() {
            if c == '\n' || c == '\r' {
                len -= 1;
            } else {
                break;
            }
        }
        len
    }

    /// The full text content of the buffer.
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let idx = self.char_idx();
        self.rope.insert_char(idx, ch);
        self.cursor.set_col(self.cursor.col + 1);
        self.dirty = true;
    }

    /// Split the current line at the cursor (Enter key).
    pub fn insert_newline(&mut self) {
        let idx = self.char_idx();
        self.rope.insert_char(idx, '\n');
        self.cursor.line += 1;
        self.cursor.set_col(0);
        self.dirty = true;
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// Returns `true` if anything was deleted.
    pub fn backspace(&mut self) -> bool {
        if self.cursor.col == 0 && self.cursor.line == 0 {
            return false;
        }
        if self.cursor.col == 0 {
            // Join with the previous line, removing its whole line break.
            let prev = self.cursor.line - 1;
            let prev_len = self.line_len(prev);
            let break_start = self.rope.line_to_char(prev) + prev_len;
            let line_start = self.rope.line_to_char(self.cursor.line);
            self.rope.remove(break_start..line_start);
            self.cursor.line = prev;
            self.cursor.set_col(prev_len);
        } else {
            let idx = self.char_idx();
            self.rope.remove(idx - 1..idx);
            self.cursor.set_col(self.cursor.col - 1);
        }
        self.dirty = true;
        true
    }

    /// Delete the character at the cursor (Delete key).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete(&mut self) -> bool {
        let line_len = self.line_len(self.cursor.line);
        if self.cursor.col < line_len {
            let idx = self.char_idx();
            self.rope.remove(idx..=idx);
        } else if self.cursor.line + 1 < self.line_count() {
            // At end of line: remove the whole line break to join lines.
            let idx = self.char_idx();
            let next_start = self.rope.line_to_char(self.cursor.line + 1);
            self.rope.remove(idx..next_start);
        } else {
            return false;
        }
        self.dirty = true;
        true
    }

    /// Move the cursor in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    /// Move to the beginning of the line (Home).
    pub const fn move_line_start(&mut self) {
        self.cursor.set_col(0);
    }

    /// Move to the end of the line (End).
    pub fn move_line_end(&mut self) {
        let len = self.line_len(self.cursor.line);
        self.cursor.set_col(len);
    }

    /// Move to the start of the previous word (Ctrl+Left).
    pub fn move_word_left(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line > 0 {
                self.cursor.line -= 1;
                self.cursor.set_col(self.line_len(self.cursor.line));
            }
            return;
        }
        let chars: Vec<char> = self
            .line(self.cursor.line)
            .unwrap_or_default()
            .chars()
            .collect();
        let mut i = self.cursor.col.min(chars.len());
        while i > 0 && !is_word_char(chars[i - 1]) {
            i -= 1;
        }
        while i > 0 && is_word_char(chars[i - 1]) {
            i -= 1;
        }
        self.cursor.set_col(i);
    }

    /// Move past the current word to the start of the next (Ctrl+Right).
    pub fn move_word_right(&mut self) {
        let len = self.line_len(self.cursor.line);
        if self.cursor.col >= len {
            if self.cursor.line + 1 < self.line_count() {
                self.cursor.line += 1;
                self.cursor.set_col(0);
            }
            return;
        }
        let chars: Vec<char> = self
            .line(self.cursor.line)
            .unwrap_or_default()
            .chars()
            .collect();
        let mut i = self.cursor.col;
        while i < len && is_word_char(chars[i]) {
            i += 1;
        }
        while i < len && !is_word_char(chars[i]) {
            i += 1;
        }
        self.cursor.set_col(i);
    }

    /// Move to a specific line and column, clamping both to the buffer.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let max_line = self.line_count().saturating_sub(1);
        self.cursor.line = line.min(max_line);
        let max_col = self.line_len(self.cursor.line);
        self.cursor.set_col(col.min(max_col));
    }

    /// Move to the start of the buffer (Ctrl+Home).
    pub const fn move_doc_start(&mut self) {
        self.cursor.line = 0;
        self.cursor.set_col(0);
    }

    /// Move to the end of the buffer (Ctrl+End).
    pub fn move_doc_end(&mut self) {
        let last = self.line_count().saturating_sub(1);
        self.cursor.line = last;
        self.cursor.set_col(self.line_len(last));
    }

    // --- Private helpers ---

    /// The cursor position as a rope char index.
    fn char_idx(&self) -> usize {
        let line_start = self.rope.line_to_char(self.cursor.line);
        line_start + self.cursor.col.min(self.line_len(self.cursor.line))
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.set_col(self.cursor.col - 1);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.set_col(self.line_len(self.cursor.line));
        }
    }

    fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.set_col(self.cursor.col + 1);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        }
    }

    fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            let max_col = self.line_len(self.cursor.line);
            self.cursor.col = self.cursor.sticky_col.min(max_col);
        }
    }

    fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            let max_col = self.line_len(self.cursor.line);
            self.cursor.col = self.cursor.sticky_col.min(max_col);
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .finish()
    }
}
