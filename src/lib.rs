//! spendlog - Terminal-based personal expense recorder
//!
//! This library provides the core functionality for spendlog: a single-user
//! expense recorder with an interactive entry form, aggregate views, and a
//! JSON backing store.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense records, category set)
//! - `ledger`: The in-memory record list with validation and aggregation
//! - `storage`: JSON file storage layer
//! - `services`: Business logic tying the ledger to its store
//! - `display`: Terminal output formatting
//! - `tui`: The interactive entry form

pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult, ValidationError};
