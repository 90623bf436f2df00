//! Line buffer: the document as an ordered sequence of editable character rows.
//!
//! Invariants (hold after every public call):
//! - The buffer always contains at least one line. An empty document is a
//!   single empty line.
//! - Lines never contain `'\n'`; the line structure itself encodes newlines.
//! - Every mutator clamps the supplied `Position` into range before touching
//!   storage, so a stale or out-of-range position can never corrupt the buffer.

pub mod width;

pub use width::{char_width, display_char, visual_col};

/// A position inside a buffer expressed as (line index, character offset within that line).
///
/// `col` is an insertion offset: it may equal the line length (cursor after the
/// last character) but never exceed it once clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
    pub fn origin() -> Self {
        Self { line: 0, col: 0 }
    }
    pub fn clamp_to<F>(&mut self, line_count: usize, mut line_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if line_count == 0 {
            self.line = 0;
            self.col = 0;
            return;
        }
        if self.line >= line_count {
            self.line = line_count - 1;
        }
        let max_len = line_len_fn(self.line);
        if self.col > max_len {
            self.col = max_len;
        }
    }
}

/// A text buffer backed by one growable character vector per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Vec<char>>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// An empty document: exactly one empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    /// Build a buffer from file text. Splits on `'\n'` only, so `"a\n"` yields
    /// `["a", ""]` and any `'\r'` stays part of its line.
    pub fn from_str(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(|l| l.chars().collect()).collect(),
        }
    }

    /// Build a buffer from already separated lines. An empty iterator yields a
    /// single empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<Vec<char>> = lines
            .into_iter()
            .map(|l| l.as_ref().chars().collect())
            .collect();
        if lines.is_empty() {
            return Self::new();
        }
        Self { lines }
    }

    /// Serialize back to file text: lines joined by a single `'\n'`, no trailing
    /// newline after the final line. Inverse of `from_str`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(line.iter());
        }
        out
    }

    /// Total number of lines in the buffer (always >= 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Character length of a line; 0 for an out-of-range index.
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, Vec::len)
    }

    pub fn line(&self, idx: usize) -> Option<&[char]> {
        self.lines.get(idx).map(Vec::as_slice)
    }

    /// Return the requested line as an owned `String`.
    pub fn line_string(&self, idx: usize) -> Option<String> {
        self.line(idx).map(|l| l.iter().collect())
    }

    /// Clamp a position into the valid cursor range of this buffer.
    pub fn clamp(&self, pos: &mut Position) {
        pos.clamp_to(self.lines.len(), |l| self.line_len(l));
    }

    /// Insert a character at the given position; advances the position by one.
    pub fn insert_char(&mut self, pos: &mut Position, c: char) {
        self.clamp(pos);
        self.lines[pos.line].insert(pos.col, c);
        pos.col += 1;
    }

    /// Insert a newline at the given position, splitting the current line. The
    /// right part becomes a new line directly below and the position moves to
    /// its start.
    pub fn insert_newline(&mut self, pos: &mut Position) {
        self.clamp(pos);
        let right = self.lines[pos.line].split_off(pos.col);
        self.lines.insert(pos.line + 1, right);
        pos.line += 1;
        pos.col = 0;
    }

    /// Delete the character before the position (backspace). At the start of a
    /// line the line is joined onto the previous one and the position lands on
    /// the join point. Returns false when nothing changed (start of buffer).
    pub fn delete_char_before(&mut self, pos: &mut Position) -> bool {
        self.clamp(pos);
        if pos.col > 0 {
            self.lines[pos.line].remove(pos.col - 1);
            pos.col -= 1;
            return true;
        }
        if pos.line == 0 {
            return false;
        }
        let current = self.lines.remove(pos.line);
        let prev = &mut self.lines[pos.line - 1];
        let join = prev.len();
        prev.extend(current);
        pos.line -= 1;
        pos.col = join;
        true
    }
}
