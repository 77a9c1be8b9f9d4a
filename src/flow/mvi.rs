//! State/intent/reducer primitives for the presentation flow.
//!
//! Every transition in the app — dismissing the splash, paging the
//! carousel — is an intent applied to an immutable state value by a pure
//! reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers never touch the terminal or the clock, which keeps the whole
//! flow drivable from tests without an input framework.

/// Marker trait for flow state objects.
///
/// States are small value types: cloning is cheap and `PartialEq` detects
/// whether anything actually changed.
pub trait FlowState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents.
///
/// Intents cover user actions (swipes, taps) and system events (the splash
/// delay elapsing).
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
///
/// The reducer is the only place where flow state changes.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: FlowState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state. Total over the state
    /// domain: intents that do not apply are absorbed, never rejected.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
