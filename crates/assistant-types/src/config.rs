use serde::{Deserialize, Serialize};
use crate::{AssistantError, Result};

/// Host-facing configuration: banner text, prompts and log verbosity.
/// Every field is optional in JSON and falls back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub title: String,
    pub tagline: String,
    pub capabilities: Vec<String>,
    /// First bot message, shown before any input
    pub welcome_message: String,
    pub input_hint: String,
    pub submit_label: String,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            title: "Clinical AI Assistant".to_string(),
            tagline: "I am your personal AI assistant. I can do things like:".to_string(),
            capabilities: vec![
                "Set medication reminders".to_string(),
                "Discuss your treatment plan and best practices".to_string(),
                "Answer medical questions".to_string(),
            ],
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
            input_hint: "Type your message...".to_string(),
            submit_label: "Message Clinical AI".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AssistantConfig {
    /// Parse a JSON document. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(AssistantError::Config(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }
}

const DEFAULT_WELCOME_MESSAGE: &str =
    "Welcome to the Clinical AI Assistant! Who am I speaking with today?";
