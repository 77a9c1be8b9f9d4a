mod common;

use common::session_on_page;
use vitalab::flow::gesture::{Density, SwipeDirection};
use vitalab::flow::pager::PagerState;
use vitalab::flow::pages::PAGES;
use vitalab::flow::session::{FlowEvent, Session};

#[test]
fn new_session_shows_the_splash_on_the_first_page() {
    let session = Session::new(Density::default());
    let snapshot = session.snapshot();
    assert!(snapshot.splash_visible);
    assert_eq!(snapshot.pager, PagerState::OnPage(0));
    assert_eq!(snapshot.page, Some(&PAGES[0]));
}

#[test]
fn carousel_input_is_dropped_while_the_splash_is_up() {
    let mut session = Session::new(Density::default());
    session.apply(FlowEvent::HorizontalDrag { delta_px: -200.0 });
    session.apply(FlowEvent::Swipe(SwipeDirection::Left));
    session.apply(FlowEvent::SkipCarousel);

    let snapshot = session.snapshot();
    assert!(snapshot.splash_visible);
    assert_eq!(snapshot.pager, PagerState::OnPage(0));
}

#[test]
fn skip_splash_reveals_the_first_page() {
    let mut session = Session::new(Density::default());
    session.apply(FlowEvent::SkipSplash);

    let snapshot = session.snapshot();
    assert!(!snapshot.splash_visible);
    assert_eq!(snapshot.pager, PagerState::OnPage(0));
}

#[test]
fn skip_splash_then_timer_elapse_changes_nothing() {
    let mut session = Session::new(Density::default());
    session.apply(FlowEvent::SkipSplash);
    session.apply(FlowEvent::SplashElapsed);

    let snapshot = session.snapshot();
    assert!(!snapshot.splash_visible);
    assert_eq!(snapshot.pager, PagerState::OnPage(0));
}

#[test]
fn drags_walk_the_whole_carousel_to_done() {
    let mut session = session_on_page(0);
    for expected in [
        PagerState::OnPage(1),
        PagerState::OnPage(2),
        PagerState::Done,
    ] {
        session.apply(FlowEvent::HorizontalDrag { delta_px: -70.0 });
        assert_eq!(session.pager(), expected);
    }
}

#[test]
fn drag_below_the_threshold_leaves_the_page() {
    let mut session = session_on_page(0);
    session.apply(FlowEvent::HorizontalDrag { delta_px: -40.0 });
    assert_eq!(session.pager(), PagerState::OnPage(0));
}

#[test]
fn rightward_drag_steps_back() {
    let mut session = session_on_page(2);
    session.apply(FlowEvent::HorizontalDrag { delta_px: 70.0 });
    assert_eq!(session.pager(), PagerState::OnPage(1));
}

#[test]
fn skip_from_a_middle_page_finishes_the_flow() {
    let mut session = session_on_page(1);
    session.apply(FlowEvent::SkipCarousel);
    assert_eq!(session.pager(), PagerState::Done);
}

#[test]
fn done_absorbs_all_further_input() {
    let mut session = session_on_page(2);
    session.apply(FlowEvent::Swipe(SwipeDirection::Left));
    assert_eq!(session.pager(), PagerState::Done);

    session.apply(FlowEvent::Swipe(SwipeDirection::Right));
    session.apply(FlowEvent::HorizontalDrag { delta_px: 300.0 });
    session.apply(FlowEvent::SkipCarousel);
    assert_eq!(session.pager(), PagerState::Done);
}

#[test]
fn snapshot_exposes_the_visible_page_content() {
    let session = session_on_page(1);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.page.map(|p| p.title), Some("Notifications"));
}

#[test]
fn snapshot_has_no_page_content_once_done() {
    let mut session = session_on_page(2);
    session.apply(FlowEvent::Swipe(SwipeDirection::Left));

    let snapshot = session.snapshot();
    assert!(snapshot.pager.is_done());
    assert_eq!(snapshot.page, None);
}
