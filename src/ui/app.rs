use std::time::Instant;

use crate::flow::gesture::{Density, SwipeDirection};
use crate::flow::session::{FlowEvent, Session, Snapshot};
use crate::flow::splash::SplashTimer;

/// Horizontal width of one terminal cell in device pixels. Translates
/// cell-based mouse drags into the pixel deltas the flow expects; with the
/// 65 px threshold this means a drag has to jump about nine columns within
/// one motion report to page.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// A press-to-release travel within this many cells counts as a tap.
const TAP_SLOP_CELLS: u16 = 1;

#[derive(Debug, Clone, Copy)]
struct DragTracker {
    start_column: u16,
    last_column: u16,
}

/// Application shell around the flow [`Session`].
///
/// Owns the resources the pure flow must not know about: the splash
/// deadline, in-progress mouse drags, the terminal size and the quit flag.
pub struct App {
    session: Session,
    timer: SplashTimer,
    drag: Option<DragTracker>,
    should_quit: bool,
    size: (u16, u16),
}

impl App {
    pub fn new(now: Instant, density: Density, size: (u16, u16)) -> Self {
        Self {
            session: Session::new(density),
            timer: SplashTimer::start(now),
            drag: None,
            should_quit: false,
            size,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    /// Advance the splash timer. Fires the elapse event at most once.
    pub fn on_tick(&mut self, now: Instant) {
        if self.timer.poll(now) {
            tracing::debug!("splash delay elapsed");
            self.session.apply(FlowEvent::SplashElapsed);
        }
    }

    /// Dismiss the splash ahead of the timer. Cancels the deadline so a
    /// later tick stays silent.
    pub fn skip_splash(&mut self) {
        self.timer.cancel();
        self.session.apply(FlowEvent::SkipSplash);
    }

    pub fn skip_carousel(&mut self) {
        self.session.apply(FlowEvent::SkipCarousel);
    }

    pub fn swipe(&mut self, direction: SwipeDirection) {
        self.session.apply(FlowEvent::Swipe(direction));
    }

    pub fn on_mouse_down(&mut self, column: u16) {
        self.drag = Some(DragTracker {
            start_column: column,
            last_column: column,
        });
    }

    /// Forward one motion report to the flow as a raw pixel delta.
    pub fn on_mouse_drag(&mut self, column: u16) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let delta_cells = f32::from(column) - f32::from(drag.last_column);
        drag.last_column = column;
        if delta_cells != 0.0 {
            self.session.apply(FlowEvent::HorizontalDrag {
                delta_px: delta_cells * CELL_WIDTH_PX,
            });
        }
    }

    /// Ends the in-progress drag. Returns `true` when the release was close
    /// enough to the press to count as a tap.
    pub fn on_mouse_up(&mut self, column: u16) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        column.abs_diff(drag.start_column) <= TAP_SLOP_CELLS
    }
}
