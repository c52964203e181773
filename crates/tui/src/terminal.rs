//! Raw-mode terminal handling.
//!
//! The app draws on the alternate screen in raw mode. Everything that enters
//! that state goes through [`setup_terminal`], and both the normal exit path
//! and the panic hook leave it through the same [`leave_screen`] sequence.

use std::io::{self, Stdout, Write};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Terminal drawn on by [`crate::App::run`].
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Failure while switching the terminal in or out of TUI mode.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("could not prepare the terminal: {0}")]
    Setup(#[source] io::Error),

    #[error("could not restore the terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Switches stdout to raw mode on the alternate screen.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] when crossterm rejects a step.
///
/// # Examples
///
/// ```no_run
/// use tarefas_tui::terminal;
///
/// # fn main() -> Result<(), terminal::TerminalError> {
/// terminal::install_panic_hook();
/// let mut term = terminal::setup_terminal()?;
/// terminal::restore_terminal(&mut term)?;
/// # Ok(())
/// # }
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Undoes [`setup_terminal`] and makes the cursor visible again.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] when a step fails. Later steps are
/// skipped in that case.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    leave_screen(terminal.backend_mut()).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen)
}

/// Chains a panic hook that puts the terminal back before the panic message
/// is printed. Install it before [`setup_terminal`].
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Ignored: there is nowhere left to report it.
        let _ = leave_screen(&mut io::stdout());
        previous(info);
    }));
}
