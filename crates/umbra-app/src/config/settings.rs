//! Settings loading and validation for `<config_dir>/umbra/config.toml`

use std::path::{Path, PathBuf};

use umbra_core::prelude::*;
use url::Url;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "umbra";

/// Default location of the configuration file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`.
///
/// A missing file yields defaults silently; an unreadable or unparsable file
/// yields defaults with a warning.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Load from `path` if given, otherwise from the default location
pub fn load_settings_from(path: Option<&Path>) -> Settings {
    match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_settings(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Reject settings that cannot work
pub fn validate_settings(settings: &Settings) -> Result<()> {
    let url = Url::parse(&settings.webhook.url).map_err(|e| {
        Error::config_invalid(format!(
            "webhook.url {:?} is not a valid URL: {}",
            settings.webhook.url, e
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config_invalid(format!(
            "webhook.url must use http or https, got {:?}",
            url.scheme()
        )));
    }

    if settings.webhook.timeout_secs == 0 {
        return Err(Error::config_invalid(
            "webhook.timeout_secs must be greater than 0",
        ));
    }

    Ok(())
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub webhook_url: Option<String>,
}

impl SettingsOverrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(url) = &self.webhook_url {
            info!("Webhook URL overridden from command line");
            settings.webhook.url = url.clone();
        }
    }
}
