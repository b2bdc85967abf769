//!
//! Library side of the quote viewer binary.
//!
//! This crate aggregates:
//! - `args` — CLI interface of the viewer.
//! - `app` — view state machine and terminal event pump.
//! - `fetcher` — background worker that talks to the quotes API.
//! - `terminal` — raw-mode/alternate-screen management.
//! - `ui` — ratatui rendering of the current view state.
#![warn(missing_docs)]
pub mod app;
pub mod args;
pub mod fetcher;
pub mod terminal;
pub mod ui;
