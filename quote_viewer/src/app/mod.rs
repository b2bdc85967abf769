//! Application state and event plumbing for the viewer.
//!
//! This module groups the pieces the main loop is built from:
//! - `state` — the `ViewState` machine and the `App` around it.
//! - `event` — terminal event pump (keys, resize, periodic ticks).
pub mod event;
pub mod state;

pub use state::{App, ViewState};
