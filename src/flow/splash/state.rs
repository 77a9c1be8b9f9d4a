use crate::flow::mvi::FlowState;

/// Visibility of the timed splash screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplashState {
    /// Splash is on screen; the carousel is not reachable yet.
    #[default]
    Visible,
    /// Splash has been dismissed, by the timer or by the skip tap.
    Hidden,
}

impl FlowState for SplashState {}

impl SplashState {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}
