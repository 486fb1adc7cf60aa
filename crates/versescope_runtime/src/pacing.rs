//! Optional output pacing for live demos.

use std::thread;
use std::time::Duration;

use crate::config::PacingConfig;

/// Sleeps between printed lines and verses according to a [`PacingConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Pacer {
    config: PacingConfig,
}

impl Pacer {
    /// Creates a pacer from its configuration.
    #[must_use]
    pub const fn new(config: PacingConfig) -> Self {
        Self { config }
    }

    /// Pauses after one line of a listing.
    pub fn after_line(&self) {
        pause(self.config.line_delay);
    }

    /// Pauses after one verse of a listing.
    pub fn after_verse(&self) {
        pause(self.config.verse_delay);
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
