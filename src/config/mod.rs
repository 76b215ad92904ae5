// SPDX-License-Identifier: MPL-2.0
//! Startup preferences read from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme preset and accent override
//! - `[clock]` - Initial display mode, hour format, analog face size
//! - `[calendar]` - Mini calendar options
//!
//! The file location is resolved by [`crate::app::paths`]. A missing file
//! yields defaults; an unreadable or invalid one yields defaults plus a
//! warning key the caller can log or show.
//!
//! # Examples
//!
//! ```no_run
//! use showcase_clock::config;
//!
//! let (config, _warning) = config::load();
//! println!("starting in {:?} mode", config.clock.mode);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::clock::{DisplayMode, HourFormat};
use crate::error::Result;
use crate::ui::theming::ThemePreset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing settings file cannot be used.
pub const LOAD_ERROR_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Color theme preset.
    #[serde(default)]
    pub theme: ThemePreset,

    /// Accent color override as `#rrggbb`, replacing the preset's primary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

/// Clock panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockConfig {
    /// Display mode at startup.
    #[serde(default)]
    pub mode: DisplayMode,

    /// 12- or 24-hour digital readout.
    #[serde(default)]
    pub hour_format: HourFormat,

    /// Whether the digital readout includes seconds.
    #[serde(default = "default_show_seconds")]
    pub show_seconds: bool,

    /// Edge length of the analog canvas in logical pixels.
    #[serde(default = "default_clock_size", skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            hour_format: HourFormat::default(),
            show_seconds: DEFAULT_SHOW_SECONDS,
            size: default_clock_size(),
        }
    }
}

impl ClockConfig {
    /// Analog canvas size clamped to the supported range. A non-finite
    /// size falls back to the default.
    #[must_use]
    pub fn clamped_size(&self) -> f32 {
        match self.size {
            Some(size) if size.is_finite() => size.clamp(MIN_CLOCK_SIZE, MAX_CLOCK_SIZE),
            _ => DEFAULT_CLOCK_SIZE,
        }
    }
}

/// Mini calendar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    /// Highlight the current day in the grid.
    #[serde(default = "default_highlight_today")]
    pub highlight_today: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            highlight_today: DEFAULT_HIGHLIGHT_TODAY,
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_show_seconds() -> bool {
    DEFAULT_SHOW_SECONDS
}

fn default_clock_size() -> Option<f32> {
    Some(DEFAULT_CLOCK_SIZE)
}

fn default_highlight_today() -> bool {
    DEFAULT_HIGHLIGHT_TODAY
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns `(config, warning)`. On failure the config is the default and the
/// warning carries [`LOAD_ERROR_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
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

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
