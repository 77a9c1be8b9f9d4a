mod intent;
mod reducer;
mod state;

pub use intent::PagerIntent;
pub use reducer::PagerReducer;
pub use state::{PagerState, PAGE_COUNT};
