//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::services::Tracker;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;
use super::views;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// On exit a final save is attempted; a failure there is reported on stderr
/// rather than failing the run, since the session is already over.
pub fn run_tui(tracker: &mut Tracker) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(tracker);
    let events = EventHandler::default();

    // Main event loop
    loop {
        terminal.draw(|frame| {
            views::render(frame, &mut app);
        })?;

        handle_event(&mut app, events.next()?)?;

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;

    // Final save on user-requested exit
    if let Err(e) = tracker.save() {
        eprintln!("Warning: could not save expenses on exit: {}", e);
    }

    Ok(())
}
