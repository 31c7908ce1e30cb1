//! Configuration types for `config.toml`

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use umbra_webhook::{
    WebhookConfig, DEFAULT_SYSTEM_TAG, DEFAULT_USER_AGENT, DEFAULT_WEBHOOK_URL,
};

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub webhook: WebhookSettings,

    #[serde(default)]
    pub agent: AgentSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub reports: ReportSettings,
}

/// Where consultations are sent
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebhookSettings {
    #[serde(default = "default_webhook_url")]
    pub url: String,

    /// Client-side request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Value of the `sistema` field added to every payload
    #[serde(default = "default_system_tag")]
    pub system_tag: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Send an OPTIONS request at startup and log the outcome
    #[serde(default = "default_true")]
    pub probe_on_start: bool,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            url: default_webhook_url(),
            timeout_secs: default_timeout_secs(),
            system_tag: default_system_tag(),
            user_agent: default_user_agent(),
            probe_on_start: true,
        }
    }
}

impl WebhookSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Client configuration derived from these settings
    pub fn client_config(&self) -> WebhookConfig {
        WebhookConfig {
            url: self.url.clone(),
            timeout: self.timeout(),
            system_tag: self.system_tag.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Legal agent chat settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AgentSettings {
    /// Simulated "typing" delay before the assistant answers
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl AgentSettings {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before leaving the application
    #[serde(default = "default_true")]
    pub confirm_exit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_exit: true }
    }
}

/// Saved report settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportSettings {
    /// Directory that saved reports are written to
    #[serde(default = "default_report_dir")]
    pub directory: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            directory: default_report_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_webhook_url() -> String {
    DEFAULT_WEBHOOK_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_system_tag() -> String {
    DEFAULT_SYSTEM_TAG.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_reply_delay_ms() -> u64 {
    1500
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.webhook.url, DEFAULT_WEBHOOK_URL);
        assert_eq!(settings.webhook.timeout(), Duration::from_secs(30));
        assert!(settings.webhook.probe_on_start);
        assert_eq!(settings.agent.reply_delay(), Duration::from_millis(1500));
        assert!(settings.behavior.confirm_exit);
        assert_eq!(settings.reports.directory, PathBuf::from("."));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str("[webhook]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(settings.webhook.timeout_secs, 5);
        assert_eq!(settings.webhook.system_tag, DEFAULT_SYSTEM_TAG);
        assert_eq!(settings.agent.reply_delay_ms, 1500);
    }

    #[test]
    fn test_client_config() {
        let mut webhook = WebhookSettings::default();
        webhook.url = "http://localhost:5678/webhook/legal".into();
        webhook.timeout_secs = 10;

        let config = webhook.client_config();
        assert_eq!(config.url, "http://localhost:5678/webhook/legal");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
