use crate::flow::mvi::Intent;

/// Discrete navigation events for the carousel.
///
/// Swipe directions are named for the drag direction of the content: a
/// leftward swipe pulls the next page in from the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerIntent {
    /// Advance to the next page, or finish after the last one.
    SwipeLeft,
    /// Go back one page. No-op on the first page.
    SwipeRight,
    /// Jump straight to the end of the flow.
    Skip,
}

impl Intent for PagerIntent {}
