//! Terminal backend abstraction and crossterm implementation.
//!
//! Raw mode is the one resource the editor must always give back. Entering
//! hands out a `TerminalGuard` whose `Drop` leaves raw mode, so a normal
//! return, an error propagated with `?`, or a panic unwinding through the event
//! loop all restore the user's terminal.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{MoveTo, Show},
    execute,
    style::ResetColor,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::stdout;

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Current terminal size as (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;
}

/// Fallback size used when the device cannot be queried.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a, B: TerminalBackend = CrosstermBackend> {
    backend: &'a mut B,
    active: bool,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }
}

/// Enter raw mode on `backend` and return a guard that will leave on drop.
pub fn enter_guard<B: TerminalBackend>(backend: &mut B) -> Result<TerminalGuard<'_, B>> {
    backend.enter()?;
    Ok(TerminalGuard {
        backend,
        active: true,
    })
}

impl<B: TerminalBackend> TerminalGuard<'_, B> {
    pub fn backend(&self) -> &B {
        self.backend
    }

    /// Leave raw mode now, surfacing any error instead of swallowing it in `Drop`.
    pub fn release(mut self) -> Result<()> {
        self.active = false;
        self.backend.leave()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode().context("enabling raw mode")?;
            self.entered = true;
            execute!(stdout(), EnterAlternateScreen, Clear(ClearType::All), MoveTo(0, 0))
                .context("entering alternate screen")?;
            tracing::debug!(target: "terminal", "raw_mode_entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            // Mark first so a failing leave is not retried from Drop.
            self.entered = false;
            let screen = execute!(stdout(), Show, ResetColor, LeaveAlternateScreen);
            disable_raw_mode().context("disabling raw mode")?;
            screen.context("leaving alternate screen")?;
            tracing::debug!(target: "terminal", "raw_mode_left");
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        crossterm::terminal::size().context("querying terminal size")
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl<B: TerminalBackend> Drop for TerminalGuard<'_, B> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.backend.leave();
        }
    }
}
