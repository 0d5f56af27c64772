use serde::{Deserialize, Serialize};

/// Scroll offset in pixels past which the navbar turns solid
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 40.0;

fn default_scroll_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD
}

/// Configuration for the navigation bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavConfig {
    /// Vertical scroll offset (px) that switches the navbar to its scrolled style
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
        }
    }
}

impl NavConfig {
    pub(super) fn normalize(&mut self) {
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            self.scroll_threshold = DEFAULT_SCROLL_THRESHOLD;
        }
    }
}
