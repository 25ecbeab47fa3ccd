//! Scroll-wheel input adapter.
//!
//! Turns raw wheel deltas into [`Intent::Advance`] so the feed never reacts
//! to input events directly. Only a downward scroll past the threshold, in
//! browse mode, advances.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::feed::ViewMode;
use crate::intent::Intent;

/// Default wheel delta a scroll must exceed to advance.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 0.0;

/// Wheel input settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
    /// A wheel event advances only when its vertical delta is above this.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

const fn default_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

/// Maps wheel events to feed intents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollInput {
    config: ScrollConfig,
}

impl ScrollInput {
    /// Create an adapter with the given settings.
    #[must_use]
    pub const fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    /// Intent for a wheel event with vertical delta `delta_y` (positive is
    /// down), given the panel currently shown.
    pub fn intent_for(&self, delta_y: f64, mode: ViewMode) -> Option<Intent> {
        if mode != ViewMode::Browse || delta_y <= self.config.threshold {
            trace!(delta_y, mode = %mode, "Wheel event ignored");
            return None;
        }
        Some(Intent::Advance)
    }

    /// Current settings.
    #[must_use]
    pub const fn config(&self) -> ScrollConfig {
        self.config
    }
}
