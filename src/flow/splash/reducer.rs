use crate::flow::mvi::Reducer;
use crate::flow::splash::intent::SplashIntent;
use crate::flow::splash::state::SplashState;

pub struct SplashReducer;

impl Reducer for SplashReducer {
    type State = SplashState;
    type Intent = SplashIntent;

    // Timer and skip converge on `Hidden`, so a skip racing the timer has
    // no observable bad outcome. Either intent on `Hidden` is a no-op.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (SplashState::Visible, SplashIntent::TimerElapsed | SplashIntent::Skip) => {
                SplashState::Hidden
            }
            (SplashState::Hidden, _) => SplashState::Hidden,
        }
    }
}
