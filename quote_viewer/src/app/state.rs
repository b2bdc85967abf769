//! View state machine of the quote viewer.
//!
//! The presentation state is a single tagged union: the viewer is either
//! waiting for a fetch, showing an error, or showing the quotes of the last
//! successful fetch. Exactly one variant holds at any time, so stale error
//! text can never survive into a new fetch cycle.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strum_macros::Display;

use crate::fetcher::FetchOutcome;
use quote_common::Quote;

/// Mutually exclusive presentation state of the viewer.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ViewState {
    /// A fetch is outstanding; the UI shows a spinner.
    Loading,
    /// The last fetch failed with the contained message.
    Error(String),
    /// The last fetch succeeded with the contained quotes.
    Loaded(Vec<Quote>),
}

/// Application state driven by the main loop.
#[derive(Debug)]
pub struct App {
    /// Current presentation state.
    pub view: ViewState,
    /// Set once the user asked to quit.
    pub should_quit: bool,
    /// Wall-clock time of the last successful fetch.
    pub last_updated: Option<DateTime<Utc>>,
    /// Animation counter for the loading spinner.
    pub spinner_frame: usize,
}

impl App {
    /// Create the initial state: a fetch is expected to be issued right away,
    /// so the viewer starts out loading.
    pub fn new() -> Self {
        App {
            view: ViewState::Loading,
            should_quit: false,
            last_updated: None,
            spinner_frame: 0,
        }
    }

    /// Whether a fetch is currently outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }

    /// The "next quote" operation.
    ///
    /// While a fetch is outstanding this is a no-op and returns `false`.
    /// Otherwise any prior error or quotes are replaced by `Loading` and
    /// `true` is returned, instructing the caller to issue exactly one new
    /// request.
    pub fn begin_fetch(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.view = ViewState::Loading;
        true
    }

    /// Settle the outstanding fetch with the worker's outcome.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Quotes(quotes) => {
                self.last_updated = Some(Utc::now());
                self.view = ViewState::Loaded(quotes);
            }
            FetchOutcome::Failed(message) => {
                self.view = ViewState::Error(message);
            }
        }
    }

    /// Handle a key event. Returns `true` when the caller must issue a new
    /// fetch request.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                false
            }
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                false
            }
            (KeyCode::Char('n'), KeyModifiers::NONE) | (KeyCode::Enter, _) => self.begin_fetch(),
            _ => false,
        }
    }

    /// Advance the spinner animation while loading.
    pub fn on_tick(&mut self) {
        if self.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded(quotes: Vec<Quote>) -> App {
        let mut app = App::new();
        app.apply_outcome(FetchOutcome::Quotes(quotes));
        app
    }

    #[test]
    fn starts_loading() {
        let app = App::new();
        assert_eq!(app.view, ViewState::Loading);
        assert!(!app.should_quit);
        assert!(app.last_updated.is_none());
    }

    #[test]
    fn successful_fetch_shows_exactly_the_received_quotes() {
        let quotes = vec![Quote {
            quote: "Carpe diem".to_string(),
            author: "Horace".to_string(),
        }];
        let app = loaded(quotes.clone());
        assert_eq!(app.view, ViewState::Loaded(quotes));
        assert!(app.last_updated.is_some());
    }

    #[test]
    fn failed_fetch_shows_the_failure_message() {
        let mut app = App::new();
        app.apply_outcome(FetchOutcome::Failed("Network response was not ok".to_string()));
        assert_eq!(
            app.view,
            ViewState::Error("Network response was not ok".to_string())
        );
    }

    #[test]
    fn next_quote_from_loaded_goes_back_to_loading() {
        let mut app = loaded(Vec::new());
        assert!(app.begin_fetch());
        assert_eq!(app.view, ViewState::Loading);
    }

    #[test]
    fn next_quote_clears_a_prior_error() {
        let mut app = App::new();
        app.apply_outcome(FetchOutcome::Failed("boom".to_string()));
        assert!(app.begin_fetch());
        assert_eq!(app.view, ViewState::Loading);
    }

    #[test]
    fn next_quote_while_loading_is_a_no_op() {
        let mut app = App::new();
        assert!(app.is_loading());
        assert!(!app.begin_fetch());
        assert_eq!(app.view, ViewState::Loading);
    }

    #[test]
    fn n_key_requests_a_fetch_only_when_idle() {
        let mut app = loaded(Vec::new());
        assert!(app.handle_key(press(KeyCode::Char('n'))));
        // Now loading: a second press must not issue another request.
        assert!(!app.handle_key(press(KeyCode::Char('n'))));
    }

    #[test]
    fn enter_behaves_like_next_quote() {
        let mut app = loaded(Vec::new());
        assert!(app.handle_key(press(KeyCode::Enter)));
        assert_eq!(app.view, ViewState::Loading);
    }

    #[test]
    fn quit_keys_set_the_quit_flag() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = loaded(Vec::new());
            assert!(!app.handle_key(key));
            assert!(app.should_quit);
        }
    }

    #[test]
    fn tick_animates_the_spinner_only_while_loading() {
        let mut app = App::new();
        app.on_tick();
        assert_eq!(app.spinner_frame, 1);

        let mut app = loaded(Vec::new());
        app.on_tick();
        assert_eq!(app.spinner_frame, 0);
    }

    #[test]
    fn state_labels_render_for_the_status_bar() {
        assert_eq!(ViewState::Loading.to_string(), "Loading");
        assert_eq!(ViewState::Error("x".to_string()).to_string(), "Error");
        assert_eq!(ViewState::Loaded(Vec::new()).to_string(), "Loaded");
    }
}
