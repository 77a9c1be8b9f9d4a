use crate::flow::mvi::Reducer;
use crate::flow::pager::intent::PagerIntent;
use crate::flow::pager::state::{PagerState, PAGE_COUNT};

pub struct PagerReducer;

impl Reducer for PagerReducer {
    type State = PagerState;
    type Intent = PagerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // `Done` absorbs everything.
        let PagerState::OnPage(index) = state else {
            return PagerState::Done;
        };

        match intent {
            PagerIntent::SwipeLeft => {
                if index + 1 < PAGE_COUNT {
                    PagerState::OnPage(index + 1)
                } else {
                    // Off the last page the index does not increment past
                    // the domain; the flow jumps straight to the sentinel.
                    PagerState::Done
                }
            }
            PagerIntent::SwipeRight => PagerState::OnPage(index.saturating_sub(1)),
            PagerIntent::Skip => PagerState::Done,
        }
    }
}
