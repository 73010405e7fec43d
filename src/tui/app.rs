//! TUI application state
//!
//! Holds the form inputs, focus, overlay mode, and transient notifications.
//! All business logic stays behind the [`Tracker`]; the app only shuttles
//! raw text in and results out.

use crate::models::today_iso;
use crate::services::Tracker;

use super::widgets::{Notification, TextInput};

/// Which form field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Category,
    Date,
}

impl Field {
    /// Next field in tab order (wraps)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Amount,
        }
    }

    /// Previous field in tab order (wraps)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

/// Which aggregate view the summary overlay shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryView {
    /// Total spend across all records
    Total,
    /// Per-category subtotals, largest first
    ByCategory,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Editing the entry form
    Form,
    /// Showing an aggregate overlay; any key returns to the form
    Summary(SummaryView),
    /// Waiting for the clear-all confirmation
    ConfirmClear,
}

/// Application state for the TUI
pub struct App<'a> {
    /// The tracker service owning the ledger and store
    pub tracker: &'a mut Tracker,
    /// Amount form field
    pub amount: TextInput,
    /// Category form field
    pub category: TextInput,
    /// Date form field, pre-filled with today
    pub date: TextInput,
    /// Currently focused field
    pub focus: Field,
    /// Current interaction mode
    pub mode: Mode,
    /// Transient toast, if any
    pub notification: Option<Notification>,
    /// Set when the user asks to exit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the app state over a tracker
    pub fn new(tracker: &'a mut Tracker) -> Self {
        let mut date = TextInput::new("Date").placeholder("YYYY-MM-DD");
        date.set_content(today_iso());

        Self {
            tracker,
            amount: TextInput::new("Amount").placeholder("0.00"),
            category: TextInput::new("Category").placeholder("e.g. Food"),
            date,
            focus: Field::Amount,
            mode: Mode::Form,
            notification: None,
            should_quit: false,
        }
    }

    /// The input that currently has focus
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            Field::Amount => &mut self.amount,
            Field::Category => &mut self.category,
            Field::Date => &mut self.date,
        }
    }

    /// Reset the form after a successful add
    ///
    /// Amount and category are emptied; the date snaps back to today,
    /// matching the original form's behavior.
    pub fn reset_form(&mut self) {
        self.amount.clear();
        self.category.clear();
        self.date.set_content(today_iso());
        self.focus = Field::Amount;
    }

    /// Show a notification toast
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop the notification once it has expired
    pub fn tick(&mut self) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired())
        {
            self.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ExpenseStore;
    use tempfile::TempDir;

    #[test]
    fn test_field_tab_order_wraps() {
        assert_eq!(Field::Amount.next(), Field::Category);
        assert_eq!(Field::Category.next(), Field::Date);
        assert_eq!(Field::Date.next(), Field::Amount);
        assert_eq!(Field::Amount.prev(), Field::Date);
    }

    #[test]
    fn test_reset_form() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker =
            Tracker::open(ExpenseStore::new(temp_dir.path().join("expenses.json")));
        let mut app = App::new(&mut tracker);

        app.amount.set_content("100");
        app.category.set_content("food");
        app.date.set_content("2020-01-01");
        app.focus = Field::Date;

        app.reset_form();
        assert_eq!(app.amount.value(), "");
        assert_eq!(app.category.value(), "");
        assert_eq!(app.date.value(), today_iso());
        assert_eq!(app.focus, Field::Amount);
    }
}
