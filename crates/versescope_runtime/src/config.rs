//! Configuration for the interactive explorer.

use std::time::Duration;

/// Output pacing delays.
///
/// Pacing is purely cosmetic: it slows listings down for live reading and
/// never changes what is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacingConfig {
    /// Pause after each line of the frequency listing.
    pub line_delay: Duration,

    /// Pause after each verse of the full listing.
    pub verse_delay: Duration,
}

impl PacingConfig {
    /// No pauses at all.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            line_delay: Duration::ZERO,
            verse_delay: Duration::ZERO,
        }
    }

    /// Demo pacing: 50 ms per frequency line, one second per verse.
    #[must_use]
    pub const fn demo() -> Self {
        Self {
            line_delay: Duration::from_millis(50),
            verse_delay: Duration::from_secs(1),
        }
    }

    /// Returns true if any delay is non-zero.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.line_delay.is_zero() || !self.verse_delay.is_zero()
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Configuration for the explorer REPL.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Word naming the corpus in messages ("was not found in this bible").
    pub corpus_label: String,

    /// Whether to print the welcome banner.
    pub show_banner: bool,

    /// Maximum locations printed per word; `None` prints all.
    pub location_limit: Option<usize>,

    /// Output pacing.
    pub pacing: PacingConfig,

    /// Prompt for the command menu.
    pub prompt: String,

    /// Prompt inside the word explorers.
    pub word_prompt: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            corpus_label: "bible".to_string(),
            show_banner: true,
            location_limit: None,
            pacing: PacingConfig::disabled(),
            prompt: "Enter command: ".to_string(),
            word_prompt: "Enter word: ".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Creates a configuration for live demos, with pacing enabled.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            pacing: PacingConfig::demo(),
            ..Self::default()
        }
    }

    /// Creates a quiet configuration for scripted use: no banner, no pacing.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            show_banner: false,
            ..Self::default()
        }
    }

    /// Builder method to set the corpus label.
    #[must_use]
    pub fn with_corpus_label(mut self, label: impl Into<String>) -> Self {
        self.corpus_label = label.into();
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to cap the number of printed locations.
    #[must_use]
    pub fn with_location_limit(mut self, limit: Option<usize>) -> Self {
        self.location_limit = limit;
        self
    }

    /// Builder method to set output pacing.
    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }
}
