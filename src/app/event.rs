//! Terminal event abstraction.
//!
//! A background task polls crossterm and forwards events over a channel so
//! the main loop stays non-blocking.  When the terminal is quiet for one
//! frame interval it sends a `Frame` instead, which keeps animations
//! running between inputs.

use std::time::Duration;

use crossterm::event::{
    self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use tokio::sync::mpsc;

/// Consecutive terminal errors after which the reader gives up.
const MAX_CONSECUTIVE_ERRORS: u32 = 10;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Frame,
}

/// Tracks consecutive terminal errors and how long to wait after each.
#[derive(Debug)]
struct ErrorBackoff {
    step: Duration,
    consecutive: u32,
}

impl ErrorBackoff {
    fn new(step: Duration) -> Self {
        Self {
            step,
            consecutive: 0,
        }
    }

    /// Record a failure.  Returns the pause before retrying, or `None` once
    /// the terminal should be treated as gone.
    fn fail(&mut self) -> Option<Duration> {
        self.consecutive += 1;
        if self.consecutive >= MAX_CONSECUTIVE_ERRORS {
            return None;
        }
        Some(self.step * self.consecutive)
    }

    fn reset(&mut self) {
        self.consecutive = 0;
    }
}

/// Spawns a background task that polls the terminal for events and sends
/// them through the returned channel.
pub fn spawn_event_reader(frame_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || {
        let mut backoff = ErrorBackoff::new(frame_rate);
        loop {
            let app_event = match poll_once(frame_rate) {
                Ok(Some(ev)) => {
                    backoff.reset();
                    ev
                }
                Ok(None) => {
                    backoff.reset();
                    continue;
                }
                Err(e) => {
                    tracing::warn!(
                        consecutive = backoff.consecutive + 1,
                        "terminal poll failed: {e}"
                    );
                    match backoff.fail() {
                        Some(pause) => std::thread::sleep(pause),
                        None => {
                            tracing::error!("terminal unreachable, stopping event reader");
                            break;
                        }
                    }
                    continue;
                }
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}

/// One poll/read round.  `Ok(None)` means an event this screen ignores.
fn poll_once(frame_rate: Duration) -> std::io::Result<Option<AppEvent>> {
    if !event::poll(frame_rate)? {
        return Ok(Some(AppEvent::Frame));
    }
    let app_event = match event::read()? {
        CtEvent::Key(k) if k.kind != KeyEventKind::Release => AppEvent::Key(k),
        // Pointer motion is noise for this screen.
        CtEvent::Mouse(m) if m.kind != MouseEventKind::Moved => AppEvent::Mouse(m),
        CtEvent::Resize(w, h) => AppEvent::Resize(w, h),
        _ => return Ok(None),
    };
    Ok(Some(app_event))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_then_gives_up() {
        let step = Duration::from_millis(16);
        let mut backoff = ErrorBackoff::new(step);
        assert_eq!(backoff.fail(), Some(step));
        assert_eq!(backoff.fail(), Some(step * 2));
        for _ in 3..MAX_CONSECUTIVE_ERRORS {
            assert!(backoff.fail().is_some());
        }
        assert_eq!(backoff.fail(), None);
    }

    #[test]
    fn success_resets_backoff() {
        let step = Duration::from_millis(16);
        let mut backoff = ErrorBackoff::new(step);
        for _ in 0..MAX_CONSECUTIVE_ERRORS - 1 {
            backoff.fail();
        }
        backoff.reset();
        assert_eq!(backoff.fail(), Some(step));
    }
}
