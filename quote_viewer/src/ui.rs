//! Rendering of the current view state.
//!
//! Pure functions from `App` to a terminal frame. Exactly one of the three
//! main surfaces is drawn per frame: the loading spinner, the error banner,
//! or the quote cards, plus a status bar at the bottom.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{App, ViewState};
use quote_common::Quote;

/// Animation frames for the loading spinner.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Text shown when the API returned an empty quote list.
const NO_QUOTE_TEXT: &str = "There is no Quote";

/// Render the application UI for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(frame.area());

    match &app.view {
        ViewState::Loading => render_spinner(frame, chunks[0], app.spinner_frame),
        ViewState::Error(message) => render_error_banner(frame, chunks[0], message),
        ViewState::Loaded(quotes) if quotes.is_empty() => render_no_quotes(frame, chunks[0]),
        ViewState::Loaded(quotes) => render_quotes(frame, chunks[0], quotes),
    }

    render_status_bar(frame, chunks[1], app);
}

/// Centered spinner shown while a fetch is outstanding.
fn render_spinner(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let spinner = Paragraph::new(Line::from(Span::styled(
        glyph,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(spinner, vertically_centered(area, 1));
}

/// Red banner shown when the last fetch failed.
fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(format!("Error: {}", message))
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(banner, vertically_centered(area, 3));
}

/// Placeholder shown when the API returned an empty list.
fn render_no_quotes(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new(NO_QUOTE_TEXT).alignment(Alignment::Center);
    frame.render_widget(placeholder, vertically_centered(area, 1));
}

/// One bordered card per quote, stacked vertically.
fn render_quotes(frame: &mut Frame, area: Rect, quotes: &[Quote]) {
    let constraints = vec![Constraint::Ratio(1, quotes.len() as u32); quotes.len()];
    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (quote, card_area) in quotes.iter().zip(cards.iter()) {
        render_card(frame, *card_area, quote);
    }
}

/// A single quote card: the quotation in quotation marks, the attribution
/// line, and the Next Quote hint.
fn render_card(frame: &mut Frame, area: Rect, quote: &Quote) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(vec![
            Span::styled("\" ", Style::default().fg(Color::Yellow)),
            Span::styled(
                quote.quote.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            ),
            Span::styled(" \"", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("- {}", quote.author),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        Line::from(""),
        Line::from(Span::styled(
            "[ n: Next Quote ]",
            Style::default().fg(Color::Cyan),
        ))
        .alignment(Alignment::Right),
    ];

    let card = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(card, area);
}

/// Status bar: state label, last-updated time, key hints.
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        app.view.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(updated) = app.last_updated {
        spans.push(Span::raw(format!(
            " | updated {}",
            updated.format("%H:%M:%S")
        )));
    }
    spans.push(Span::styled(
        if app.is_loading() {
            " | q: Quit"
        } else {
            " | n: Next Quote | q: Quit"
        },
        Style::default().fg(Color::Gray),
    ));

    let bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

/// Carve a `height`-row strip out of the vertical middle of `area`.
fn vertically_centered(area: Rect, height: u16) -> Rect {
    let padding = area.height.saturating_sub(height) / 2;
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(padding),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::FetchOutcome;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for (i, cell) in buffer.content.iter().enumerate() {
            if i > 0 && i % width == 0 {
                text.push('\n');
            }
            text.push_str(cell.symbol());
        }
        text
    }

    fn loaded(quotes: Vec<Quote>) -> App {
        let mut app = App::new();
        app.apply_outcome(FetchOutcome::Quotes(quotes));
        app
    }

    #[test]
    fn loading_shows_the_spinner_and_no_error() {
        let text = render_to_text(&App::new());
        assert!(text.contains(SPINNER_FRAMES[0]));
        assert!(!text.contains("Error:"));
    }

    #[test]
    fn loaded_quote_renders_a_card_without_spinner_or_banner() {
        let app = loaded(vec![Quote {
            quote: "Carpe diem".to_string(),
            author: "Horace".to_string(),
        }]);
        let text = render_to_text(&app);
        assert!(text.contains("Carpe diem"));
        assert!(text.contains("- Horace"));
        assert!(!text.contains("Error:"));
        for glyph in SPINNER_FRAMES {
            assert!(!text.contains(glyph));
        }
    }

    #[test]
    fn empty_list_renders_the_no_quote_text() {
        let text = render_to_text(&loaded(Vec::new()));
        assert!(text.contains("There is no Quote"));
        assert!(!text.contains("Error:"));
    }

    #[test]
    fn error_renders_the_banner_with_the_message() {
        let mut app = App::new();
        app.apply_outcome(FetchOutcome::Failed("Network response was not ok".to_string()));
        let text = render_to_text(&app);
        assert!(text.contains("Error: Network response was not ok"));
    }

    #[test]
    fn next_quote_hint_is_hidden_while_loading() {
        assert!(!render_to_text(&App::new()).contains("Next Quote"));
        assert!(render_to_text(&loaded(Vec::new())).contains("Next Quote"));
    }

    #[test]
    fn spinner_advances_with_ticks() {
        let mut app = App::new();
        app.on_tick();
        let text = render_to_text(&app);
        assert!(text.contains(SPINNER_FRAMES[1]));
    }
}
