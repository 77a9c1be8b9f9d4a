//! Terminal splash and onboarding carousel for the Vitalab health
//! companion.
//!
//! A timed splash screen, a three-page swipeable introduction and a
//! placeholder end screen. The presentation flow in [`flow`] is a pure
//! state machine; [`ui`] is the terminal substrate that drives it.

pub mod flow;
pub mod logging;
pub mod ui;
