//! Error types shared across the workspace.
//!
//! The `ViewerError` enum unifies common failure cases for I/O, HTTP
//! transport, JSON decoding, and channel communication, allowing crates to
//! propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type for the quote viewer.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// I/O error originating from the standard library (terminal, files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// HTTP transport failure (connection refused, DNS, invalid URL, ...).
    /// Transparent so the rejection's own message reaches the user unchanged.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The quotes API answered with a non-OK status. The display text is the
    /// exact message the UI shows for this case.
    #[error("Network response was not ok")]
    BadStatus(reqwest::StatusCode),

    /// Failure while decoding the response body via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Crossbeam/channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Crossbeam/channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}
