//! Playback pacing
//!
//! Wall-clock delay between renders so a human can follow the drawing.
//! Pacing never changes what gets drawn, only when.

use std::thread;
use std::time::Duration;

/// Sleeps a fixed interval on every [`pause`](Pacer::pause)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// A pacer that never sleeps
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}
