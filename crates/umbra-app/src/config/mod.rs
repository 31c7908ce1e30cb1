//! Configuration file parsing for UMBRA Legal
//!
//! Settings live in `<config_dir>/umbra/config.toml`; every key is optional.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, load_settings, load_settings_from, validate_settings, SettingsOverrides,
};
pub use types::*;
