use std::time::{Duration, Instant};

/// How long the splash stays up before the carousel is revealed.
pub const SPLASH_DELAY: Duration = Duration::from_millis(3000);

/// One-shot deadline for dismissing the splash screen.
///
/// The timer never blocks. The event loop polls it with the current time
/// while input stays live, so the skip tap can preempt the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTimer {
    deadline: Instant,
    fired: bool,
}

impl SplashTimer {
    /// Arm the timer at session start.
    pub fn start(now: Instant) -> Self {
        Self {
            deadline: now + SPLASH_DELAY,
            fired: false,
        }
    }

    /// Returns `true` exactly once, on the first poll at or past the
    /// deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.fired || now < self.deadline {
            return false;
        }
        self.fired = true;
        true
    }

    /// Disarm without firing. Used when the skip tap dismisses the splash
    /// before the delay runs out; later polls stay silent.
    pub fn cancel(&mut self) {
        self.fired = true;
    }
}
