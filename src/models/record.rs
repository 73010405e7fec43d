//! Expense record model
//!
//! Represents a single recorded transaction: an amount, a category label,
//! and a calendar date.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded expense
///
/// Field order matters for the serialized form: the backing store holds a
/// bare array of `{"amount": ..., "category": ..., "date": ...}` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Amount spent, currency-agnostic (one implicit unit)
    pub amount: f64,

    /// Category label, normalized to leading-capital form
    pub category: String,

    /// Calendar date as ISO-8601 text (`YYYY-MM-DD`), no time component
    pub date: String,
}

impl ExpenseRecord {
    /// Create a new record from already-validated fields
    pub fn new(amount: f64, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            date: date.into(),
        }
    }
}

/// Today's date in ISO-8601 form, for the default date suggestion
pub fn today_iso() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.2}", self.date, self.category, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = ExpenseRecord::new(49.5, "Food", "2026-08-29");
        assert_eq!(record.amount, 49.5);
        assert_eq!(record.category, "Food");
        assert_eq!(record.date, "2026-08-29");
    }

    #[test]
    fn test_today_is_iso_shaped() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }

    #[test]
    fn test_display() {
        let record = ExpenseRecord::new(100.0, "Transport", "2026-01-15");
        assert_eq!(format!("{}", record), "2026-01-15 Transport 100.00");
    }

    #[test]
    fn test_serialized_shape() {
        let record = ExpenseRecord::new(12.5, "Bills", "2026-02-01");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"amount":12.5,"category":"Bills","date":"2026-02-01"}"#
        );
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{"amount": 20, "category": "Shopping", "date": "2026-03-10"}"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, ExpenseRecord::new(20.0, "Shopping", "2026-03-10"));
    }
}
