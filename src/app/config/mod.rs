// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loaded from and saved to a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Preference key and an optional locale override
//! - `[page]` - Attribute, id and class names of the page markup contract
//!
//! Every field has a default, so a partial or empty file is valid.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `OLIB_I18N_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use olib_i18n::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Report a fixed locale instead of the system one
//! config.general.locale = Some("ja-JP".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Key under which the language preference is persisted.
    #[serde(default = "default_preference_key")]
    pub preference_key: String,

    /// Locale reported to the resolver instead of the system locale
    /// (e.g., "ja-JP").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            preference_key: default_preference_key(),
            locale: None,
        }
    }
}

/// Names the page markup uses for the localization hooks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageConfig {
    /// Attribute carrying an element's translation key.
    #[serde(default = "default_key_attribute")]
    pub key_attribute: String,

    /// Id of the element showing the active language's name.
    #[serde(default = "default_label_id")]
    pub label_id: String,

    /// Id of the language dropdown menu.
    #[serde(default = "default_menu_id")]
    pub menu_id: String,

    /// Class of the container that holds the selector and its menu.
    #[serde(
        default = "default_selector_class",
        deserialize_with = "deserialize_class_name"
    )]
    pub selector_class: String,

    /// Class toggled on the menu to show it.
    #[serde(
        default = "default_open_class",
        deserialize_with = "deserialize_class_name"
    )]
    pub open_class: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            key_attribute: default_key_attribute(),
            label_id: default_label_id(),
            menu_id: default_menu_id(),
            selector_class: default_selector_class(),
            open_class: default_open_class(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Page markup contract.
    #[serde(default)]
    pub page: PageConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_preference_key() -> String {
    DEFAULT_PREFERENCE_KEY.to_string()
}

fn default_key_attribute() -> String {
    DEFAULT_KEY_ATTRIBUTE.to_string()
}

fn default_label_id() -> String {
    DEFAULT_LABEL_ID.to_string()
}

fn default_menu_id() -> String {
    DEFAULT_MENU_ID.to_string()
}

fn default_selector_class() -> String {
    DEFAULT_SELECTOR_CLASS.to_string()
}

fn default_open_class() -> String {
    DEFAULT_OPEN_CLASS.to_string()
}

/// A class name is a single non-empty token.
fn deserialize_class_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(D::Error::custom(format!("invalid class name: {:?}", raw)));
    }
    Ok(trimmed.to_string())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default configuration with a warning describing the failure.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "Failed to load config");
                    return (
                        Config::default(),
                        Some(format!("could not load {}: {error}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                preference_key: "landing-lang".to_string(),
                locale: Some("ko-KR".to_string()),
            },
            page: PageConfig {
                key_attribute: "data-t".to_string(),
                label_id: "language-button".to_string(),
                menu_id: "language-menu".to_string(),
                selector_class: "language-picker".to_string(),
                open_class: "is-open".to_string(),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "").expect("failed to write empty file");

        let loaded = load_from_path(&config_path).expect("empty file should load");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[page]\nmenu_id = \"menu\"\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("partial file should load");
        assert_eq!(loaded.page.menu_id, "menu");
        assert_eq!(loaded.page.key_attribute, DEFAULT_KEY_ATTRIBUTE);
        assert_eq!(loaded.general.preference_key, DEFAULT_PREFERENCE_KEY);
        assert!(loaded.general.locale.is_none());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn class_name_with_whitespace_is_rejected() {
        let result = toml::from_str::<Config>("[page]\nopen_class = \"is open\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[page\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        let warning = warning.expect("invalid file should warn");
        assert!(warning.starts_with("could not load"), "{warning}");
        assert!(warning.contains(CONFIG_FILE), "{warning}");
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("config");

        save_with_override(&Config::default(), Some(base_dir.clone()))
            .expect("save should create directories");
        assert!(base_dir.join(CONFIG_FILE).exists());
    }
}
