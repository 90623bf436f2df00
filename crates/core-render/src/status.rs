//! Status line composition.
//!
//! Editing format: `<name>[ [+]]  Ln X, Col Y[  <message>]`
//! * `<name>` is the base file name (the full path when it has none).
//! * ` [+]` appears only when the buffer has unsaved changes.
//! * `X`/`Y` are the 1-based cursor line and character column.
//! * A transient message, when active, follows after two spaces.
//!
//! While the quit prompt is open the whole row is the prompt label followed by
//! the response typed so far.
//!
//! Two stages: `compose_status` produces ordered `StatusSegment`s and
//! `format_status` renders them. Keeping the stages apart lets the frame
//! builder measure the prompt without re-parsing the string.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::Path;

/// Everything needed to render a status line.
pub struct StatusContext<'a> {
    pub file_name: &'a Path,
    pub dirty: bool,
    /// 0-based cursor line.
    pub line: usize,
    /// 0-based cursor column in characters.
    pub col: usize,
    pub message: Option<&'a str>,
    /// `(label, response)` while the quit prompt is open.
    pub prompt: Option<(&'a str, &'a str)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    FileName(Cow<'a, str>),
    Modified,
    Position { line_1: usize, col_1: usize },
    Message(&'a str),
    Prompt { label: &'a str, response: &'a str },
}

pub fn compose_status<'a>(ctx: &'a StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    if let Some((label, response)) = ctx.prompt {
        return vec![StatusSegment::Prompt { label, response }];
    }
    let name = ctx
        .file_name
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| ctx.file_name.to_string_lossy());
    let mut out = Vec::with_capacity(4);
    out.push(StatusSegment::FileName(name));
    if ctx.dirty {
        out.push(StatusSegment::Modified);
    }
    out.push(StatusSegment::Position {
        line_1: ctx.line + 1,
        col_1: ctx.col + 1,
    });
    if let Some(msg) = ctx.message.filter(|m| !m.is_empty()) {
        out.push(StatusSegment::Message(msg));
    }
    out
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    let mut s = String::with_capacity(48);
    for seg in segments {
        match seg {
            StatusSegment::FileName(name) => s.push_str(name),
            StatusSegment::Modified => s.push_str(" [+]"),
            StatusSegment::Position { line_1, col_1 } => {
                let _ = write!(s, "  Ln {line_1}, Col {col_1}");
            }
            StatusSegment::Message(msg) => {
                s.push_str("  ");
                s.push_str(msg);
            }
            StatusSegment::Prompt { label, response } => {
                s.push_str(label);
                s.push_str(response);
            }
        }
    }
    s
}

pub fn build_status(ctx: &StatusContext) -> String {
    format_status(&compose_status(ctx))
}
