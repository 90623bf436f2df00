//! Rendering primitives + frame assembly + terminal emission.
//!
//! Every render is a full repaint built from scratch: `compose::build_frame`
//! derives the viewport from the model, lays out the gutter, text and status
//! rows into a `Frame`, and `apply::paint` emits that frame through the
//! `Writer`. Nothing is cached between frames.
//!
//! `Cell` stores the text for leader cells along with its visual width;
//! continuation cells (width == 0) occupy the remaining columns of a wide
//! character and never print text. Zero-width codepoints are appended to the
//! preceding leader so combining marks stay attached to their base.
//!
//! Invariants:
//! - Leader: width >= 1, `text` non-empty.
//! - Continuation: width == 0, `text` empty.
//! - Continuations immediately follow their leader horizontally; no gaps.
//! - The frame cursor is always inside the frame (for non-empty frames).

use bitflags::bitflags;
use core_text::{char_width, display_char};

pub mod apply;
pub mod compose;
pub mod status;
pub mod writer;

pub use apply::{paint, render};
pub use compose::{RenderOptions, build_frame};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellFlags: u8 {
        const DIM     = 0b0000_0001; // gutter line numbers
        const REVERSE = 0b0000_0010; // status row
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Printed text (leader cells only). Empty for continuation cells.
    pub text: String,
    /// Visual width in terminal columns. `0` designates a continuation cell.
    pub width: u8,
    pub flags: CellFlags,
}

impl Cell {
    #[inline]
    pub fn leader(text: &str, width: u16, flags: CellFlags) -> Self {
        Self {
            text: text.to_string(),
            width: width.clamp(1, 2) as u8,
            flags,
        }
    }
    #[inline]
    pub fn continuation(flags: CellFlags) -> Self {
        Self {
            text: String::new(),
            width: 0,
            flags,
        }
    }
    #[inline]
    pub fn is_leader(&self) -> bool {
        self.width > 0
    }
    #[inline]
    fn is_blank(&self) -> bool {
        self.text == " " && self.flags.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        // Single space leader for blank areas.
        Cell {
            text: " ".to_string(),
            width: 1,
            flags: CellFlags::empty(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
    /// Terminal (column, row) where the cursor is left after painting.
    pub cursor: (u16, u16),
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
            cursor: (0, 0),
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a leader at (x,y) and populate continuation cells for its width.
    /// A wide character that would overflow the row is not drawn.
    pub fn set_cell(&mut self, x: u16, y: u16, text: &str, width: u16, flags: CellFlags) -> bool {
        let w = width.max(1);
        if y >= self.height || u32::from(x) + u32::from(w) > u32::from(self.width) {
            return false;
        }
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell::leader(text, w, flags);
        }
        for dx in 1..w {
            if let Some(c_idx) = self.index(x + dx, y) {
                self.cells[c_idx] = Cell::continuation(flags);
            }
        }
        true
    }

    /// Draw `chars` starting at column `x` of row `y`, skipping the first
    /// `skip_cells` cells of the text. Control characters are replaced and
    /// zero-width codepoints attach to the previous leader. Stops at the right
    /// edge. Returns the column after the last drawn cell.
    pub fn put_chars<I>(&mut self, x: u16, y: u16, chars: I, skip_cells: usize, flags: CellFlags) -> u16
    where
        I: IntoIterator<Item = char>,
    {
        let mut cell = 0usize; // text cell position before horizontal skip
        let mut cur = x;
        let mut last_leader: Option<u16> = None;
        for c in chars {
            let w = char_width(c);
            if w == 0 {
                if let Some(lx) = last_leader
                    && let Some(idx) = self.index(lx, y)
                {
                    self.cells[idx].text.push(c);
                }
                continue;
            }
            let start = cell;
            cell += w;
            if start < skip_cells {
                // A wide character cut by the left edge is dropped; its
                // visible half becomes blank so later columns stay aligned.
                for _ in skip_cells..cell {
                    if !self.set_cell(cur, y, " ", 1, flags) {
                        break;
                    }
                    cur = cur.saturating_add(1);
                }
                continue;
            }
            let shown = display_char(c);
            let mut buf = [0u8; 4];
            if !self.set_cell(cur, y, shown.encode_utf8(&mut buf), w as u16, flags) {
                break;
            }
            last_leader = Some(cur);
            cur = cur.saturating_add(w as u16);
        }
        cur
    }

    /// Draw `s` from column `x` with no horizontal skip.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, flags: CellFlags) -> u16 {
        self.put_chars(x, y, s.chars(), 0, flags)
    }

    /// Iterate leader cells of a row, yielding (text, width, flags, start_x).
    pub fn row_leaders(&self, y: u16) -> impl Iterator<Item = (&str, u16, CellFlags, u16)> + '_ {
        let width = self.width;
        let start = y as usize * width as usize;
        let mut x = 0u16;
        std::iter::from_fn(move || {
            while x < width {
                let cell = &self.cells[start + x as usize];
                if cell.is_leader() {
                    let w = u16::from(cell.width);
                    let out = (cell.text.as_str(), w, cell.flags, x);
                    x = x.saturating_add(w);
                    return Some(out);
                }
                x += 1;
            }
            None
        })
    }

    /// Runs of same-styled text for row `y`, stopping after the last
    /// non-blank cell so trailing unstyled space is never written.
    pub fn row_runs(&self, y: u16) -> Vec<(String, CellFlags)> {
        if y >= self.height {
            return Vec::new();
        }
        let start = y as usize * self.width as usize;
        let row = &self.cells[start..start + self.width as usize];
        let end = row
            .iter()
            .rposition(|c| c.is_leader() && !c.is_blank())
            .map_or(0, |i| i + 1);
        let mut runs: Vec<(String, CellFlags)> = Vec::new();
        for (text, _, flags, x) in self.row_leaders(y) {
            if usize::from(x) >= end {
                break;
            }
            match runs.last_mut() {
                Some((s, f)) if *f == flags => s.push_str(text),
                _ => runs.push((text.to_string(), flags)),
            }
        }
        runs
    }

    /// Plain text of row `y` with trailing blanks trimmed (diagnostics/tests).
    pub fn row_text(&self, y: u16) -> String {
        self.row_runs(y).into_iter().map(|(s, _)| s).collect()
    }
}
