//! Raw escape-sequence plumbing behind [`super::TerminalManager`].

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch `writer` to the alternate screen.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored so this is safe
/// to call from drop and from the panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout.
pub fn restore_terminal() {
    leave_tui_mode(&mut io::stdout());
}
