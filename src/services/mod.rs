//! Business logic layer
//!
//! Couples the in-memory ledger with the persistence adapter.

pub mod tracker;

pub use tracker::{AddOutcome, Tracker};
