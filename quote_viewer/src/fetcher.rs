//! Background worker that fetches quotes from the HTTP API.
//!
//! The UI loop never blocks on the network. Instead it sends a fetch request
//! into a channel and polls for the settled outcome on every tick. The worker
//! drains requests strictly sequentially, so at most one HTTP request is in
//! flight at any time.
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, warn};
use reqwest::blocking::Client;
use std::thread;

use quote_common::config::API_KEY_HEADER;
use quote_common::{Quote, ViewerConfig, ViewerError};

/// Result of one settled fetch cycle, ready for `App::apply_outcome`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The fetch succeeded with this list of quotes (possibly empty).
    Quotes(Vec<Quote>),
    /// The fetch failed; the message is shown in the error banner.
    Failed(String),
}

/// Handle to the background fetch worker.
pub struct QuoteFetcher {
    request_tx: Sender<()>,
    outcome_rx: Receiver<FetchOutcome>,
}

impl QuoteFetcher {
    /// Build the HTTP client and spawn the worker thread.
    ///
    /// The worker lives until the handle is dropped; it exits once either
    /// channel end is disconnected.
    pub fn spawn(config: ViewerConfig) -> Result<Self, ViewerError> {
        let client = Client::builder().build()?;
        let (request_tx, request_rx) = unbounded::<()>();
        let (outcome_tx, outcome_rx) = unbounded::<FetchOutcome>();

        thread::spawn(move || {
            while request_rx.recv().is_ok() {
                let outcome = match fetch_quotes(&client, &config) {
                    Ok(quotes) => FetchOutcome::Quotes(quotes),
                    Err(e) => {
                        warn!("Fetch failed: {}", e);
                        FetchOutcome::Failed(e.to_string())
                    }
                };
                if outcome_tx.send(outcome).is_err() {
                    break;
                }
            }
            debug!("Fetcher thread stopping...");
        });

        Ok(Self {
            request_tx,
            outcome_rx,
        })
    }

    /// Enqueue one fetch cycle.
    pub fn request(&self) -> Result<(), ViewerError> {
        self.request_tx
            .send(())
            .map_err(|e| ViewerError::ChannelSend(e.to_string()))
    }

    /// Non-blocking poll for a settled fetch.
    pub fn try_outcome(&self) -> Option<FetchOutcome> {
        self.outcome_rx.try_recv().ok()
    }
}

/// Issue one `GET <base_url>` request with the API-key header and decode the
/// response body as a JSON array of quotes.
///
/// A non-OK status is an error even when the body is readable; the body is
/// only decoded for successful responses.
pub fn fetch_quotes(client: &Client, config: &ViewerConfig) -> Result<Vec<Quote>, ViewerError> {
    debug!("GET {}", config.base_url);
    let response = client
        .get(&config.base_url)
        .header(API_KEY_HEADER, &config.api_key)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        warn!("Quotes API answered with status {}", status);
        return Err(ViewerError::BadStatus(status));
    }

    let body = response.bytes()?;
    let quotes = Quote::parse_list(&body)?;
    debug!("Received {} quote(s): {:?}", quotes.len(), quotes);
    Ok(quotes)
}
