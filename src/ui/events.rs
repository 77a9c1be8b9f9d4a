use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, MouseEvent};

/// Events delivered to the main loop.
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Periodic heartbeat; carries no payload, the loop stamps it with the
    /// current time. Keeps the splash timer advancing while the user is
    /// idle.
    Tick,
    Resize(u16, u16),
}

/// Reads terminal input on a dedicated thread and interleaves tick events.
///
/// All events are serialized onto one channel, so the main loop mutates
/// state from a single execution context.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match crossterm::event::poll(timeout) {
                    Ok(true) => {
                        let event = match crossterm::event::read() {
                            Ok(event) => event,
                            Err(err) => {
                                tracing::error!(error = %err, "input read failed");
                                break;
                            }
                        };
                        let forwarded = match event {
                            Event::Key(key) => tx.send(AppEvent::Key(key)),
                            Event::Mouse(mouse) => tx.send(AppEvent::Mouse(mouse)),
                            Event::Resize(cols, rows) => tx.send(AppEvent::Resize(cols, rows)),
                            _ => Ok(()),
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {
                        // Timeout, no input pending.
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "input poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
