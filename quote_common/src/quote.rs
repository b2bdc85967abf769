//! Quote payload received from the quotes API.
//!
//! Quotes arrive as a JSON array in the HTTP response body and are decoded
//! via `serde_json`.
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// A single quotation returned by the quotes API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quotation text.
    pub quote: String,
    /// Person the quotation is attributed to.
    pub author: String,
}

impl Quote {
    /// Decode a JSON array of quotes from raw response bytes.
    pub fn parse_list(bytes: &[u8]) -> Result<Vec<Quote>, ViewerError> {
        let quotes = serde_json::from_slice(bytes)?;
        Ok(quotes)
    }
}
