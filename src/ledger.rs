//! The in-memory expense ledger
//!
//! Owns the ordered list of expense records for the current session along
//! with the category set, and provides the validation and aggregation
//! operations the presentation layer calls into. The ledger is pure
//! in-memory state: persistence is a separate step layered on top by the
//! tracker service, so a mutation can always be exercised without touching
//! disk.

use crate::error::ValidationError;
use crate::models::{normalize_label, CategorySet, ExpenseRecord};

/// A per-category spending subtotal
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Normalized category label
    pub category: String,
    /// Sum of amounts recorded under this category
    pub subtotal: f64,
}

/// The ordered, exclusively-owned collection of expense records
#[derive(Debug, Clone)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    categories: CategorySet,
}

impl Ledger {
    /// Create an empty ledger with the default category set
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            categories: CategorySet::new(),
        }
    }

    /// Create a ledger from previously persisted records
    ///
    /// The category set is NOT rebuilt from the loaded records; it starts
    /// from the defaults again, matching the original program's behavior.
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self {
            records,
            categories: CategorySet::new(),
        }
    }

    /// Validate raw form input and append a record
    ///
    /// Validation happens before any mutation: a rejected add leaves both
    /// the record list and the category set untouched.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NotANumber`] if the amount does not parse as a
    ///   finite number (checked first, before the field presence checks).
    /// - [`ValidationError::MissingField`] if the category or date is empty
    ///   after trimming.
    pub fn add_record(
        &mut self,
        raw_amount: &str,
        raw_category: &str,
        raw_date: &str,
    ) -> Result<ExpenseRecord, ValidationError> {
        let amount: f64 = raw_amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotANumber(raw_amount.trim().to_string()))?;
        if !amount.is_finite() {
            return Err(ValidationError::NotANumber(raw_amount.trim().to_string()));
        }

        let category = normalize_label(raw_category);
        if category.is_empty() {
            return Err(ValidationError::MissingField("Category"));
        }

        let date = raw_date.trim();
        if date.is_empty() {
            return Err(ValidationError::MissingField("Date"));
        }

        let record = ExpenseRecord::new(amount, category, date);
        self.categories.insert(record.category.clone());
        self.records.push(record.clone());

        Ok(record)
    }

    /// Sum of all recorded amounts; 0 for an empty ledger
    pub fn total_spend(&self) -> f64 {
        // Folding from 0.0 keeps the empty total at positive zero;
        // `Iterator::sum` starts from -0.0, which displays as "-0.00"
        self.records.iter().fold(0.0, |acc, r| acc + r.amount)
    }

    /// Per-category subtotals, largest first
    ///
    /// Categories with equal subtotals keep their first-seen order (the sort
    /// is stable). An empty ledger yields an empty vec.
    pub fn spend_by_category(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for record in &self.records {
            match totals.iter_mut().find(|t| t.category == record.category) {
                Some(total) => total.subtotal += record.amount,
                None => totals.push(CategoryTotal {
                    category: record.category.clone(),
                    subtotal: record.amount,
                }),
            }
        }

        totals.sort_by(|a, b| b.subtotal.total_cmp(&a.subtotal));
        totals
    }

    /// Empty the ledger unconditionally
    ///
    /// The category set is left alone, matching the original program: labels
    /// discovered during the session remain available after a clear.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// The known category labels
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Number of records in the ledger
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
