//! Shared helpers for driving the flow from tests.

#![allow(dead_code, unused_imports)]

use std::time::Duration;

use vitalab::flow::gesture::{Density, SwipeDirection};
use vitalab::flow::pager::PagerState;
use vitalab::flow::session::{FlowEvent, Session};

pub fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Session with the splash already dismissed, sitting on `page`.
pub fn session_on_page(page: usize) -> Session {
    let mut session = Session::new(Density::default());
    session.apply(FlowEvent::SplashElapsed);
    for _ in 0..page {
        session.apply(FlowEvent::Swipe(SwipeDirection::Left));
    }
    assert_eq!(session.pager(), PagerState::OnPage(page));
    session
}
