//! Tracker service
//!
//! Coordinates the ledger and the expense store. Every user-visible
//! operation goes through here: the presentation layers (TUI and CLI) never
//! touch the store directly.
//!
//! Mutation and persistence are an explicit two-step contract. The ledger
//! mutates first; the follow-up write can fail without undoing the mutation,
//! and that failure is handed back to the caller as a separate signal so it
//! can be shown as a warning while the session continues with the in-memory
//! state as the authority.

use crate::error::{ExpenseError, ExpenseResult, ValidationError};
use crate::ledger::{CategoryTotal, Ledger};
use crate::models::{CategorySet, ExpenseRecord};
use crate::storage::ExpenseStore;

/// The result of a successful add
///
/// The record made it into the ledger; `persisted` reports whether the
/// follow-up write to the backing store also succeeded.
#[derive(Debug)]
pub struct AddOutcome {
    /// The record that was appended
    pub record: ExpenseRecord,
    /// Outcome of the persistence write triggered by the add
    pub persisted: Result<(), ExpenseError>,
}

/// Service tying the ledger to its backing store
pub struct Tracker {
    ledger: Ledger,
    store: ExpenseStore,
}

impl Tracker {
    /// Open a tracker, loading any previously persisted records
    ///
    /// A missing or unreadable store starts the session with an empty
    /// ledger; startup never fails on the store.
    pub fn open(store: ExpenseStore) -> Self {
        let ledger = Ledger::from_records(store.load());
        Self { ledger, store }
    }

    /// Validate raw input, append a record, and persist the ledger
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the input is rejected; the ledger
    /// and the store are both untouched in that case. A persistence failure
    /// after a successful append is NOT an error here — it is reported in
    /// the returned [`AddOutcome`].
    pub fn add_expense(
        &mut self,
        raw_amount: &str,
        raw_category: &str,
        raw_date: &str,
    ) -> Result<AddOutcome, ValidationError> {
        let record = self.ledger.add_record(raw_amount, raw_category, raw_date)?;
        let persisted = self.store.save(self.ledger.records());

        Ok(AddOutcome { record, persisted })
    }

    /// Empty the ledger and delete the backing store
    ///
    /// Confirmation, if any, is the caller's concern. The in-memory clear
    /// happens even if the file removal then fails.
    pub fn clear_all(&mut self) -> ExpenseResult<()> {
        self.ledger.clear();
        self.store.purge()
    }

    /// Write the current ledger contents to the backing store
    ///
    /// Used for the final save on exit.
    pub fn save(&self) -> ExpenseResult<()> {
        self.store.save(self.ledger.records())
    }

    /// Sum of all recorded amounts
    pub fn total_spend(&self) -> f64 {
        self.ledger.total_spend()
    }

    /// Per-category subtotals, largest first
    pub fn spend_by_category(&self) -> Vec<CategoryTotal> {
        self.ledger.spend_by_category()
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        self.ledger.records()
    }

    /// The category labels to offer the user
    pub fn categories(&self) -> &CategorySet {
        self.ledger.categories()
    }

    /// Whether the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
}
