//! Terminal writer abstraction.
//!
//! Collects primitive terminal operations for one frame and emits them with a
//! single flush, so the screen never shows a half-drawn frame between two
//! blocking reads.
//!
//! Invariants:
//! * Commands preserve ordering; no flushing mid-frame.
//! * All positions are absolute (0,0) origin; caller ensures bounds.
//! * The writer owns no global state; it is a short-lived object per frame.

use crate::CellFlags;
use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{Write, stdout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    /// Clear the row the cursor is on. Must follow a `MoveTo(0, y)`.
    ClearLine,
    Print(String),
    Style(CellFlags),
    ResetStyle,
    HideCursor,
    ShowCursor,
}

#[derive(Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn clear_line(&mut self) {
        self.cmds.push(Command::ClearLine);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    /// Print `s` with `flags`, resetting attributes afterwards.
    pub fn print_styled<S: Into<String>>(&mut self, s: S, flags: CellFlags) {
        if flags.is_empty() {
            self.print(s);
            return;
        }
        self.cmds.push(Command::Style(flags));
        self.print(s);
        self.cmds.push(Command::ResetStyle);
    }

    pub fn hide_cursor(&mut self) {
        self.cmds.push(Command::HideCursor);
    }
    pub fn show_cursor(&mut self) {
        self.cmds.push(Command::ShowCursor);
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn flush(self) -> Result<()> {
        let mut out = stdout().lock();
        self.flush_to(&mut out)
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::ClearLine => queue!(out, Clear(ClearType::CurrentLine))?,
                Command::Print(s) => queue!(out, Print(s))?,
                Command::Style(flags) => {
                    if flags.contains(CellFlags::DIM) {
                        queue!(out, SetForegroundColor(Color::DarkGrey))?;
                    }
                    if flags.contains(CellFlags::REVERSE) {
                        queue!(out, SetAttribute(Attribute::Reverse))?;
                    }
                }
                Command::ResetStyle => queue!(out, SetAttribute(Attribute::Reset), ResetColor)?,
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
            }
        }
        out.flush().context("flushing frame")?;
        Ok(())
    }
}
