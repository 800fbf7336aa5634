//! Terminal ownership for the browser loop.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen and puts it back when dropped. The panic hook from
//! [`setup_panic_hook`] covers the paths where drop never runs.

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{enter_tui_mode, leave_tui_mode, restore_terminal};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal once, on drop or on the first explicit call.
#[derive(Debug, Default)]
struct RestoreGuard {
    restored: bool,
}

impl RestoreGuard {
    fn restore(&mut self) {
        if !self.restored {
            self.restored = true;
            leave_tui_mode(&mut io::stdout());
        }
    }
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub struct TerminalManager {
    terminal: Tui,
    guard: RestoreGuard,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen, then clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        // From here on the guard owns cleanup, even if setup fails halfway.
        let guard = RestoreGuard::default();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Leave TUI mode now rather than on drop.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.restore();
        self.terminal.show_cursor()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_once() {
        let mut guard = RestoreGuard::default();
        guard.restore();
        assert!(guard.restored);
        // second call and the drop are no-ops
        guard.restore();
    }
}
