// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[source]` - Where slides come from (manifest, static images, fallback)
//! - `[autoplay]` - Automatic advance
//! - `[navigation]` - Boundary policy and transition duration
//! - `[layout]` - Panel sizing and recompute debouncing
//! - `[gesture]` - Swipe recognition thresholds
//!
//! Every field is optional; missing values fall back to [`defaults`].
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_CAROUSEL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.autoplay.enabled = Some(false);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::carousel::subcomponents::navigation::BoundaryPolicy;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// File names of the built-in image set, resolved against [`DEFAULT_IMAGE_BASE`].
pub const DEFAULT_IMAGES: [&str; 6] = [
    "abstract_painting_1.png",
    "abstract_painting_2.png",
    "abstract_painting_3.png",
    "abstract_painting_4.png",
    "pumpkins_art.png",
    "mouse_cup.png",
];

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Slide source settings.
///
/// `manifest` wins over `images` when both are set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// JSON manifest location (http(s) URL or file path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    /// Base location relative image paths resolve against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Static ordered list of image paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    /// Image shown when no slide loads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_image: Option<String>,

    /// Per-image load timeout in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u32>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            manifest: None,
            base: None,
            images: None,
            fallback_image: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Auto-advance settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoplayConfig {
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Delay between advances in milliseconds.
    #[serde(
        default = "default_autoplay_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            enabled: Some(true),
            interval_ms: Some(DEFAULT_AUTOPLAY_INTERVAL_MS),
        }
    }
}

/// Navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// What happens when navigating past either end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<BoundaryPolicy>,

    /// Slide transition duration in milliseconds (0 disables the animation).
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            boundary: Some(BoundaryPolicy::default()),
            transition_ms: Some(DEFAULT_TRANSITION_MS),
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LayoutConfig {
    /// Fraction of the window height a slide image may occupy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height_ratio: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_padding: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_padding: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_debounce_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_debounce_ms: Option<u64>,
}

/// Swipe gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GestureConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_distance_px: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_time_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_resistance: Option<f32>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub autoplay: AutoplayConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub gesture: GestureConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_timeout_secs() -> Option<u32> {
    Some(DEFAULT_LOAD_TIMEOUT_SECS)
}

fn default_autoplay_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring {}: {}", path.display(), err);
                    return (Config::default(), Some(err.to_string()));
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
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            source: SourceConfig {
                manifest: Some("https://example.com/slides.json".to_string()),
                fallback_image: Some("images/placeholder.png".to_string()),
                ..SourceConfig::default()
            },
            navigation: NavigationConfig {
                boundary: Some(BoundaryPolicy::Clamp),
                transition_ms: Some(250),
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.autoplay.enabled, Some(true));
        assert_eq!(
            config.autoplay.interval_ms,
            Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
        );
        assert_eq!(config.navigation.boundary, Some(BoundaryPolicy::Wrap));
        assert_eq!(config.source.manifest, None);
        assert_eq!(config.source.timeout_secs, Some(DEFAULT_LOAD_TIMEOUT_SECS));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gesture]\nswipe_distance_px = 80.0\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.gesture.swipe_distance_px, Some(80.0));
        assert_eq!(loaded.autoplay.enabled, Some(true));
        assert_eq!(loaded.source.timeout_secs, Some(DEFAULT_LOAD_TIMEOUT_SECS));
        assert_eq!(loaded.navigation.transition_ms, Some(DEFAULT_TRANSITION_MS));
    }

    #[test]
    fn boundary_policy_parses_lowercase() {
        let config: Config =
            toml::from_str("[navigation]\nboundary = \"clamp\"\n").expect("valid toml");
        assert_eq!(config.navigation.boundary, Some(BoundaryPolicy::Clamp));
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"purple\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_with_override_returns_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            autoplay: AutoplayConfig {
                enabled: Some(false),
                interval_ms: Some(8000),
            },
            layout: LayoutConfig {
                max_height_ratio: Some(0.5),
                ..LayoutConfig::default()
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("failed to save");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.autoplay.enabled, Some(false));
        assert_eq!(loaded.autoplay.interval_ms, Some(8000));
        assert_eq!(loaded.layout.max_height_ratio, Some(0.5));
    }
}
