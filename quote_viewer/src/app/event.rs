//! Terminal event pump.
//!
//! Polls crossterm for keyboard and resize events and synthesizes a periodic
//! `Tick` when nothing happened within the tick interval, so the main loop can
//! drain fetch outcomes and animate the spinner at a steady rate.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Events the main loop reacts to.
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
    /// Periodic tick for spinner animation and outcome polling.
    Tick,
}

/// Blocking event source with a bounded wait per call.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create an event handler with the given tick interval.
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait for the next event, at most one tick interval.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(TuiEvent::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick),
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_rate_is_taken_from_the_constructor() {
        let handler = EventHandler::new(250);
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
    }
}
