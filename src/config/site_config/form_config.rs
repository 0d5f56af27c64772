use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated network latency of a form submission (milliseconds)
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1400;

/// Lifetime of a feedback message (milliseconds)
pub const DEFAULT_FEEDBACK_MS: u64 = 5000;

fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

fn default_feedback_ms() -> u64 {
    DEFAULT_FEEDBACK_MS
}

/// Labels of the submit control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormLabels {
    pub idle: String,
    pub sending: String,
}

impl Default for FormLabels {
    fn default() -> Self {
        Self {
            idle: "Send Message".to_string(),
            sending: "Sending…".to_string(),
        }
    }
}

/// Feedback texts shown under the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormMessages {
    pub missing_fields: String,
    pub invalid_email: String,
    pub success: String,
    pub failure: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            missing_fields: "Please fill in all required fields.".to_string(),
            invalid_email: "Please enter a valid email address.".to_string(),
            success: "Thank you! We'll get back to you shortly.".to_string(),
            failure: "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Inline look of one feedback kind. All three properties are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStyle {
    pub color: String,
    pub background: String,
    pub border: String,
}

/// Per-kind feedback colours. The stylesheet has no rules for these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackStyles {
    pub success: FeedbackStyle,
    pub error: FeedbackStyle,
}

impl Default for FeedbackStyles {
    fn default() -> Self {
        Self {
            success: FeedbackStyle {
                color: "var(--brown)".to_string(),
                background: "rgba(198,167,94,0.15)".to_string(),
                border: "1px solid var(--gold)".to_string(),
            },
            error: FeedbackStyle {
                color: "#c0392b".to_string(),
                background: "rgba(192,57,43,0.08)".to_string(),
                border: "1px solid rgba(192,57,43,0.3)".to_string(),
            },
        }
    }
}

/// Configuration for the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormConfig {
    /// Latency of the simulated submission
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// How long feedback stays on screen
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u64,
    pub labels: FormLabels,
    pub messages: FormMessages,
    pub feedback_styles: FeedbackStyles,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            feedback_ms: default_feedback_ms(),
            labels: FormLabels::default(),
            messages: FormMessages::default(),
            feedback_styles: FeedbackStyles::default(),
        }
    }
}

impl FormConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn feedback_lifetime(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}
