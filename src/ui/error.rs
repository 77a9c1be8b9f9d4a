use std::io;

use thiserror::Error;

/// Failures surfaced by the terminal runtime.
///
/// The flow itself has no failure domain; everything that can go wrong
/// lives at the terminal boundary.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("terminal setup failed")]
    Setup(#[source] io::Error),

    #[error("terminal draw failed")]
    Draw(#[source] io::Error),
}
