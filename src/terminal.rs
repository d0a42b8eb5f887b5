//! Raw-mode terminal session and non-blocking key polling.
//!
//! Raw mode is scoped by an RAII guard: acquisition switches the terminal to
//! raw mode on the alternate screen with the cursor hidden, and `Drop`
//! restores the prior state. Tying restoration to `Drop` covers every exit
//! path, including quit, a mid-tick hit, and panic unwinding, so the user's
//! shell is never left unusable.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::{cursor, execute, terminal};

use crate::error::{GameError, GameResult};

/// Holds the terminal in raw mode for its lifetime.
pub struct RawModeGuard;

impl RawModeGuard {
    /// Enter raw mode on the alternate screen.
    ///
    /// Failure here is fatal for the game; a partial setup is rolled back
    /// before the error is returned.
    pub fn enter(out: &mut impl Write) -> GameResult<Self> {
        terminal::enable_raw_mode().map_err(|source| GameError::Terminal {
            context: "enable raw mode",
            source,
        })?;
        if let Err(source) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(GameError::Terminal {
                context: "enter alternate screen",
                source,
            });
        }
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Failures here are swallowed: there is no saner place to report
        // them than the terminal being restored.
        let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Poll for at most one buffered key press without blocking.
///
/// Returns immediately with `None` when nothing is buffered, consuming no
/// input. When input is present, exactly one event is read; further buffered
/// keys stay queued for later ticks. Non-character events (resize, key
/// release) are consumed and reported as `None`.
pub fn poll_key() -> GameResult<Option<char>> {
    let ready = event::poll(Duration::ZERO).map_err(|source| GameError::Terminal {
        context: "poll input",
        source,
    })?;
    if !ready {
        return Ok(None);
    }
    let read = event::read().map_err(|source| GameError::Terminal {
        context: "read input",
        source,
    })?;
    match read {
        Event::Key(KeyEvent {
            code: KeyCode::Char(c),
            kind: KeyEventKind::Press,
            ..
        }) => Ok(Some(c)),
        _ => Ok(None),
    }
}
