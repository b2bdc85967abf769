//! Quote Viewer — a terminal client that fetches quotes from a remote HTTP API
//! and shows one fetch at a time: a loading spinner while the request is
//! outstanding, an error banner when it fails, and quote cards when it
//! succeeds. Pressing `n` (or Enter) clears the current result and fetches the
//! next quote.
//!
//! Usage example (CLI):
//! ```bash
//! quote_viewer --base-url https://quotes.example/v1/quotes --api-key KEY
//! ```
//!
//! Both values can also be supplied via the `QUOTES_BASE_URL` and
//! `QUOTES_API_KEY` environment variables.
#![warn(missing_docs)]

use clap::Parser;
use quote_common::ViewerError;
use quote_viewer::app::App;
use quote_viewer::app::event::{EventHandler, TuiEvent};
use quote_viewer::args::Args;
use quote_viewer::fetcher::QuoteFetcher;
use quote_viewer::terminal::{Tui, install_panic_hook, restore_terminal, setup_terminal};
use quote_viewer::ui;

fn main() -> Result<(), ViewerError> {
    init_logger();
    let args = Args::parse();
    let fetcher = QuoteFetcher::spawn(args.to_config())?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &fetcher, args.tick_ms);
    restore_terminal(terminal)?;
    result
}

/// Main event loop: render, wait for input or a tick, drain fetch outcomes.
fn run_app(terminal: &mut Tui, fetcher: &QuoteFetcher, tick_ms: u64) -> Result<(), ViewerError> {
    let mut app = App::new();
    let events = EventHandler::new(tick_ms);

    // The state starts out Loading, so the first request goes out right away.
    fetcher.request()?;

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match events.next()? {
            TuiEvent::Key(key) => {
                if app.handle_key(key) {
                    fetcher.request()?;
                }
            }
            TuiEvent::Tick => app.on_tick(),
            TuiEvent::Resize(_, _) => {}
        }

        while let Some(outcome) = fetcher.try_outcome() {
            app.apply_outcome(outcome);
        }
    }
    Ok(())
}

/// stderr shares the terminal with the TUI, so the default level stays quiet
/// unless `RUST_LOG` asks for more.
fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
