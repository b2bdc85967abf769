//! Connection settings for the quotes API.

/// Name of the API-key request header.
///
/// The upstream service matches on this exact spelling (note the missing
/// trailing `y`), so it must not be "corrected" to `X-Api-Key`.
pub const API_KEY_HEADER: &str = "X-Api-Ke";

/// Connection settings passed into the fetch worker at construction.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Endpoint the viewer fetches quotes from.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
}

impl ViewerConfig {
    /// Create a config from the two externally supplied values.
    ///
    /// Values are trimmed and stripped of matching quotes so that quoted
    /// shell arguments do not break the request URL.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        ViewerConfig {
            base_url: normalize(base_url),
            api_key: normalize(api_key),
        }
    }
}

/// Trim whitespace and a single pair of surrounding double quotes.
fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}
