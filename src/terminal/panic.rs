//! Panic hook that gives the terminal back before the panic message prints.

use super::setup::restore_terminal;
use std::panic;

/// Wrap the current panic hook (color-eyre's, once installed) so the
/// terminal leaves raw mode first.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}
