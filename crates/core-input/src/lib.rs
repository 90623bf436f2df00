//! Blocking input source backed by `crossterm::event::read`.
//!
//! The edit loop is strictly sequential: it blocks on `InputSource::next_event`,
//! fully processes the event, renders, and only then asks for the next one.
//! Events the editor does not consume are skipped inside the source so callers
//! never see them.

mod key_token;

use anyhow::{Context, Result};
use core_events::InputEvent;

/// A source of normalized input events.
pub trait InputSource {
    /// Block until the next event the editor consumes is available.
    fn next_event(&mut self) -> Result<InputEvent>;
}

#[derive(Debug, Default)]
pub struct CrosstermInput {
    skipped: u64,
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for CrosstermInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            let raw = crossterm::event::read().context("reading terminal input")?;
            match key_token::map_event(&raw) {
                Some(ev) => {
                    log_input(&ev);
                    return Ok(ev);
                }
                None => {
                    self.skipped += 1;
                    tracing::trace!(target: "input", skipped = self.skipped, "event_skipped");
                }
            }
        }
    }
}

/// Trace an input event without leaking typed text into the log.
#[inline]
pub(crate) fn log_input(ev: &InputEvent) {
    match ev {
        InputEvent::Key(k) => {
            tracing::trace!(target: "input", kind = k.code.kind_str(), mods = ?k.mods, "key");
        }
        InputEvent::Resize(w, h) => {
            tracing::debug!(target: "input", cols = *w, rows = *h, "resize");
        }
    }
}
