//! Core data models for spendlog
//!
//! Defines the expense record and the growable category set.

pub mod category;
pub mod record;

pub use category::{normalize_label, CategorySet, DEFAULT_CATEGORIES};
pub use record::{today_iso, ExpenseRecord};
