//! Command-line arguments for the Quote Viewer.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

use quote_common::ViewerConfig;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Endpoint the viewer fetches quotes from.
    #[clap(long, env = "QUOTES_BASE_URL")]
    pub base_url: String,

    /// API key sent with every request.
    #[clap(long, env = "QUOTES_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Tick interval of the UI loop in milliseconds.
    #[clap(long, default_value_t = 100)]
    pub tick_ms: u64,
}

impl Args {
    /// Convert parsed arguments into the fetcher configuration.
    pub fn to_config(&self) -> ViewerConfig {
        ViewerConfig::new(&self.base_url, &self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_required_flags() {
        let args = Args::try_parse_from([
            "quote_viewer",
            "--base-url",
            "https://quotes.example/v1/quotes",
            "--api-key",
            "secret",
        ])
        .unwrap();
        let config = args.to_config();
        assert_eq!(config.base_url, "https://quotes.example/v1/quotes");
        assert_eq!(config.api_key, "secret");
        assert_eq!(args.tick_ms, 100);
    }

    #[test]
    fn base_url_is_required() {
        assert!(Args::try_parse_from(["quote_viewer", "--api-key", "secret"]).is_err());
    }
}
