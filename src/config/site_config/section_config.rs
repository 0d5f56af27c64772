use super::reveal_config::normalize_threshold;
use serde::{Deserialize, Serialize};

/// Visible fraction of a section that makes it the current one
pub const DEFAULT_SECTION_THRESHOLD: f64 = 0.4;

fn default_threshold() -> f64 {
    DEFAULT_SECTION_THRESHOLD
}

fn default_active_weight() -> String {
    "600".to_string()
}

fn default_idle_weight() -> String {
    "500".to_string()
}

/// Configuration for highlighting the nav link of the current section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionConfig {
    /// Fraction of a section that must be visible
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// `font-weight` of the link for the current section
    #[serde(default = "default_active_weight")]
    pub active_weight: String,
    /// `font-weight` of every other link
    #[serde(default = "default_idle_weight")]
    pub idle_weight: String,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            active_weight: default_active_weight(),
            idle_weight: default_idle_weight(),
        }
    }
}

impl SectionConfig {
    pub(super) fn normalize(&mut self) {
        self.threshold = normalize_threshold(self.threshold, DEFAULT_SECTION_THRESHOLD);
    }
}
