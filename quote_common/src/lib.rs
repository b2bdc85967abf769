//!
//! Common types shared across the quote viewer workspace.
//!
//! This crate aggregates:
//! - `error` — unified error type `ViewerError` used across the workspace.
//! - `result` — handy `Result<T, ViewerError>` alias.
//! - `quote` — the quote payload received from the HTTP API.
//! - `config` — connection settings for the quotes API.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod quote;
pub mod result;

pub use config::ViewerConfig;
pub use error::ViewerError;
pub use quote::Quote;
pub use result::Result;
