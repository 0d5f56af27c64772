use serde::{Deserialize, Serialize};
use thiserror::Error;

mod form_config;
mod nav_config;
mod reveal_config;
mod section_config;

pub use form_config::{
    FeedbackStyle, FeedbackStyles, FormConfig, FormLabels, FormMessages, DEFAULT_FEEDBACK_MS,
    DEFAULT_SUBMIT_DELAY_MS,
};
pub use nav_config::{NavConfig, DEFAULT_SCROLL_THRESHOLD};
pub use reveal_config::{
    RevealConfig, DEFAULT_REVEAL_BOTTOM_MARGIN, DEFAULT_REVEAL_THRESHOLD, DEFAULT_STAGGER_STEP_MS,
};
pub use section_config::{SectionConfig, DEFAULT_SECTION_THRESHOLD};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Page behavior configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub sections: SectionConfig,
    pub form: FormConfig,
    /// `EnvFilter` directive for the console logger
    pub log_level: Option<String>,
}

impl SiteConfig {
    /// Parse a JSON document, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = serde_json::from_str(json)?;
        config.normalize();
        Ok(config)
    }

    /// Clamp out-of-range values back into something usable
    pub fn normalize(&mut self) {
        self.nav.normalize();
        self.reveal.normalize();
        self.sections.normalize();
    }
}
