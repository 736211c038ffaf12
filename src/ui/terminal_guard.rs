use ratatui::DefaultTerminal;
use std::io;

/// Puts the terminal back in cooked mode when the update screen closes.
///
/// `ratatui::try_init` already restores on panic; this covers the normal
/// exit paths, including early returns on draw errors.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// Raw mode plus alternate screen for the update screen.
pub fn setup_terminal() -> io::Result<(DefaultTerminal, TerminalGuard)> {
    let terminal = ratatui::try_init()?;
    Ok((terminal, TerminalGuard))
}
