//! Top-level session state: splash visibility composed with the carousel
//! position, driven by the event stream from the input substrate.

use crate::flow::gesture::{Density, SwipeDetector, SwipeDirection};
use crate::flow::mvi::Reducer;
use crate::flow::pager::{PagerIntent, PagerReducer, PagerState};
use crate::flow::pages::{page, PageData};
use crate::flow::splash::{SplashIntent, SplashReducer, SplashState};

/// Input events, as delivered by the rendering/input substrate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowEvent {
    /// The one-shot splash delay elapsed.
    SplashElapsed,
    /// Tap on the splash skip affordance.
    SkipSplash,
    /// Raw horizontal drag delta in device pixels.
    HorizontalDrag { delta_px: f32 },
    /// Discrete swipe. Keyboard navigation maps here directly, bypassing
    /// the pixel threshold.
    Swipe(SwipeDirection),
    /// Tap on the carousel skip affordance.
    SkipCarousel,
}

/// What the render layer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub splash_visible: bool,
    pub pager: PagerState,
    /// Content of the visible carousel page; `None` on the splash-less
    /// terminal screen.
    pub page: Option<&'static PageData>,
}

/// Owns the navigation state for one run of the app.
///
/// State is mutated only here; the view layer reads [`Snapshot`]s and never
/// holds state of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    splash: SplashState,
    pager: PagerState,
    swipe: SwipeDetector,
}

impl Session {
    pub fn new(density: Density) -> Self {
        Self {
            splash: SplashState::default(),
            pager: PagerState::default(),
            swipe: SwipeDetector::new(density),
        }
    }

    pub fn splash_visible(&self) -> bool {
        self.splash.is_visible()
    }

    pub fn pager(&self) -> PagerState {
        self.pager
    }

    /// Apply one input event. Total over the state domain: events that do
    /// not apply in the current state are dropped, never rejected.
    ///
    /// While the splash is up the carousel is not on screen, so drags,
    /// swipes and carousel-skip taps cannot reach it.
    pub fn apply(&mut self, event: FlowEvent) {
        match event {
            FlowEvent::SplashElapsed => self.dispatch_splash(SplashIntent::TimerElapsed),
            FlowEvent::SkipSplash => self.dispatch_splash(SplashIntent::Skip),
            FlowEvent::HorizontalDrag { delta_px } => {
                if self.splash.is_visible() {
                    return;
                }
                if let Some(direction) = self.swipe.classify(delta_px) {
                    self.dispatch_pager(direction.into());
                }
            }
            FlowEvent::Swipe(direction) => {
                if self.splash.is_visible() {
                    return;
                }
                self.dispatch_pager(direction.into());
            }
            FlowEvent::SkipCarousel => {
                if self.splash.is_visible() {
                    return;
                }
                self.dispatch_pager(PagerIntent::Skip);
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            splash_visible: self.splash.is_visible(),
            pager: self.pager,
            page: self.pager.page_index().and_then(page),
        }
    }

    fn dispatch_splash(&mut self, intent: SplashIntent) {
        self.splash = SplashReducer::reduce(self.splash, intent);
    }

    fn dispatch_pager(&mut self, intent: PagerIntent) {
        self.pager = PagerReducer::reduce(self.pager, intent);
    }
}

impl From<SwipeDirection> for PagerIntent {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => PagerIntent::SwipeLeft,
            SwipeDirection::Right => PagerIntent::SwipeRight,
        }
    }
}
