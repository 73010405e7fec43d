//! Key event handling for the TUI
//!
//! Maps key presses onto tracker operations depending on the current
//! interaction mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Mode, SummaryView};
use super::event::Event;
use super::widgets::Notification;

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
    Ok(())
}

/// Handle a key press
fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore key release events (Windows terminals report both)
    if key.kind == KeyEventKind::Release {
        return;
    }

    match app.mode {
        Mode::Form => handle_form_key(app, key),
        Mode::Summary(_) => {
            // Any key dismisses the overlay
            app.mode = Mode::Form;
        }
        Mode::ConfirmClear => handle_confirm_key(app, key),
    }
}

/// Keys while editing the entry form
fn handle_form_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('t') => app.mode = Mode::Summary(SummaryView::Total),
            KeyCode::Char('b') => app.mode = Mode::Summary(SummaryView::ByCategory),
            KeyCode::Char('x') => app.mode = Mode::ConfirmClear,
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => submit(app),
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.prev(),
        KeyCode::Char(c) => app.focused_input().insert(c),
        KeyCode::Backspace => app.focused_input().backspace(),
        KeyCode::Left => app.focused_input().move_left(),
        KeyCode::Right => app.focused_input().move_right(),
        KeyCode::Home => app.focused_input().move_start(),
        KeyCode::End => app.focused_input().move_end(),
        _ => {}
    }
}

/// Keys while the clear-all confirmation is showing
fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            match app.tracker.clear_all() {
                Ok(()) => app.notify(Notification::success("All expense data cleared")),
                // In-memory clear happened; only the file removal failed
                Err(e) => app.notify(Notification::warning(e.to_string())),
            }
            app.mode = Mode::Form;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.mode = Mode::Form;
        }
        _ => {}
    }
}

/// Submit the form as a new expense
fn submit(app: &mut App) {
    let raw_amount = app.amount.value().to_string();
    let raw_category = app.category.value().to_string();
    let raw_date = app.date.value().to_string();

    match app.tracker.add_expense(&raw_amount, &raw_category, &raw_date) {
        Ok(outcome) => {
            match outcome.persisted {
                Ok(()) => app.notify(Notification::success("Expense added")),
                // The add stands in memory; the write failure is a warning
                Err(e) => app.notify(Notification::warning(format!(
                    "Expense added, but saving failed: {}",
                    e
                ))),
            }
            app.reset_form();
        }
        Err(e) => app.notify(Notification::error(e.to_string())),
    }
}
