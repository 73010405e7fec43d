//! Terminal user interface
//!
//! The interactive entry form: amount, category, and date inputs, plus the
//! aggregate overlays and the clear-all confirmation. Presentation only —
//! every operation is delegated to the tracker service.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use terminal::run_tui;
