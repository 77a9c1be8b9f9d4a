use vitalab::flow::mvi::Reducer;
use vitalab::flow::pager::{PagerIntent, PagerReducer, PagerState, PAGE_COUNT};

#[test]
fn default_is_the_first_page() {
    assert_eq!(PagerState::default(), PagerState::OnPage(0));
}

#[test]
fn swipe_left_advances_through_the_carousel() {
    let first = PagerReducer::reduce(PagerState::OnPage(0), PagerIntent::SwipeLeft);
    assert_eq!(first, PagerState::OnPage(1));

    let second = PagerReducer::reduce(first, PagerIntent::SwipeLeft);
    assert_eq!(second, PagerState::OnPage(2));
}

#[test]
fn swipe_left_on_the_last_page_jumps_to_done() {
    // The index never reaches PAGE_COUNT; the last page goes straight to
    // the sentinel.
    let state = PagerReducer::reduce(PagerState::OnPage(PAGE_COUNT - 1), PagerIntent::SwipeLeft);
    assert_eq!(state, PagerState::Done);
}

#[test]
fn swipe_right_on_the_first_page_is_floor_clamped() {
    let state = PagerReducer::reduce(PagerState::OnPage(0), PagerIntent::SwipeRight);
    assert_eq!(state, PagerState::OnPage(0));
}

#[test]
fn swipe_right_steps_back_one_page() {
    let state = PagerReducer::reduce(PagerState::OnPage(2), PagerIntent::SwipeRight);
    assert_eq!(state, PagerState::OnPage(1));

    let state = PagerReducer::reduce(state, PagerIntent::SwipeRight);
    assert_eq!(state, PagerState::OnPage(0));
}

#[test]
fn skip_jumps_to_done_from_every_page() {
    for page in 0..PAGE_COUNT {
        let state = PagerReducer::reduce(PagerState::OnPage(page), PagerIntent::Skip);
        assert_eq!(state, PagerState::Done, "skip from page {page}");
    }
}

#[test]
fn done_absorbs_every_intent() {
    for intent in [
        PagerIntent::SwipeLeft,
        PagerIntent::SwipeRight,
        PagerIntent::Skip,
    ] {
        let state = PagerReducer::reduce(PagerState::Done, intent);
        assert_eq!(state, PagerState::Done, "done absorbed {intent:?}");
    }
}

#[test]
fn page_index_is_none_once_done() {
    assert_eq!(PagerState::OnPage(1).page_index(), Some(1));
    assert_eq!(PagerState::Done.page_index(), None);
    assert!(PagerState::Done.is_done());
}
