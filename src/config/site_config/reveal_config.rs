use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Visible fraction of an element that triggers its reveal
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;

/// Pixels cut from the bottom of the viewport before intersection tests
pub const DEFAULT_REVEAL_BOTTOM_MARGIN: f64 = 40.0;

/// Delay added per not-yet-visible sibling (milliseconds)
pub const DEFAULT_STAGGER_STEP_MS: u64 = 80;

fn default_threshold() -> f64 {
    DEFAULT_REVEAL_THRESHOLD
}

fn default_bottom_margin() -> f64 {
    DEFAULT_REVEAL_BOTTOM_MARGIN
}

fn default_stagger_step_ms() -> u64 {
    DEFAULT_STAGGER_STEP_MS
}

/// Clamp an intersection ratio into 0.0..=1.0, falling back on garbage
pub fn normalize_threshold(threshold: f64, fallback: f64) -> f64 {
    if threshold.is_nan() || threshold.is_infinite() {
        return fallback;
    }
    threshold.clamp(0.0, 1.0)
}

/// Configuration for scroll-triggered reveal animations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Bottom viewport margin (px) excluded from intersection
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: f64,
    /// Transition delay step between siblings revealed together
    #[serde(default = "default_stagger_step_ms")]
    pub stagger_step_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            bottom_margin: default_bottom_margin(),
            stagger_step_ms: default_stagger_step_ms(),
        }
    }
}

impl RevealConfig {
    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }

    pub(super) fn normalize(&mut self) {
        self.threshold = normalize_threshold(self.threshold, DEFAULT_REVEAL_THRESHOLD);
        if !self.bottom_margin.is_finite() || self.bottom_margin < 0.0 {
            self.bottom_margin = DEFAULT_REVEAL_BOTTOM_MARGIN;
        }
    }
}
