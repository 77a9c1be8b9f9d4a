use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use crate::flow::gesture::Density;
use crate::ui::app::App;
use crate::ui::error::UiError;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Heartbeat for the splash timer; also bounds redraw latency.
const TICK_RATE: Duration = Duration::from_millis(50);

pub fn run() -> Result<(), UiError> {
    let (mut terminal, guard) = setup_terminal().map_err(UiError::Setup)?;
    let size = terminal.size().map_err(UiError::Setup)?;
    let mut app = App::new(Instant::now(), Density::default(), (size.width, size.height));
    let events = EventHandler::new(TICK_RATE);
    tracing::info!(cols = size.width, rows = size.height, "session started");

    loop {
        terminal
            .draw(|frame| draw(frame, &app))
            .map_err(UiError::Draw)?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("session ended");
    drop(guard);
    Ok(())
}
