//! Persistent user preferences.
//!
//! Every front end reads and writes `~/.config/tcg-binder/settings.toml`
//! through these functions. A missing or unreadable file means defaults;
//! command-line flags override the loaded values per invocation.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tcg_binder_core::Language;

use crate::config::{DisplayConfig, Theme};

/// Canonical path to the settings file: `~/.config/tcg-binder/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("tcg-binder").join("settings.toml")
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub theme: Theme,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub show_images: bool,
    pub allow_newlines: bool,
    pub invert_filters: bool,
    pub enable_collections: bool,
    pub show_duplicates: bool,
    pub genesys: bool,
    pub strict_editions: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let config = DisplayConfig::default();
        Self {
            show_images: config.show_images,
            allow_newlines: config.allow_newlines,
            invert_filters: config.invert_filters,
            enable_collections: config.enable_collections,
            show_duplicates: config.show_duplicates,
            genesys: config.genesys,
            strict_editions: config.strict_editions,
        }
    }
}

impl Settings {
    /// The display configuration these settings describe.
    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig {
            show_images: self.display.show_images,
            allow_newlines: self.display.allow_newlines,
            language: self.general.language,
            invert_filters: self.display.invert_filters,
            enable_collections: self.display.enable_collections,
            show_duplicates: self.display.show_duplicates,
            genesys: self.display.genesys,
            strict_editions: self.display.strict_editions,
        }
    }

    /// Set one value by its dotted key, e.g. `display.genesys` or `theme`.
    pub fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let key = key.trim();
        let field = key.rsplit('.').next().unwrap_or(key);
        match field {
            "theme" => self.general.theme = value.parse().map_err(invalid)?,
            "language" => self.general.language = value.parse().map_err(invalid)?,
            _ => {
                let flag = parse_bool(value)?;
                let slot = match field {
                    "show_images" => &mut self.display.show_images,
                    "allow_newlines" => &mut self.display.allow_newlines,
                    "invert_filters" => &mut self.display.invert_filters,
                    "enable_collections" => &mut self.display.enable_collections,
                    "show_duplicates" => &mut self.display.show_duplicates,
                    "genesys" => &mut self.display.genesys,
                    "strict_editions" => &mut self.display.strict_editions,
                    _ => return Err(invalid(format!("unknown setting: '{key}'"))),
                };
                *slot = flag;
            }
        }
        Ok(())
    }
}

fn invalid(msg: impl ToString) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg.to_string())
}

fn parse_bool(value: &str) -> io::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(format!("expected true or false, got '{value}'"))),
    }
}

/// Load settings from the canonical path.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. Missing files give defaults silently; a file
/// that does not parse gives defaults with a warning.
pub fn load_settings_from(path: &Path) -> Settings {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Settings::default();
    };
    match toml::from_str(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring unreadable settings file {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// Write settings to `path` atomically.
pub fn save_settings_to(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Flip light/dark in the canonical settings file and return the new theme.
pub fn toggle_theme() -> io::Result<Theme> {
    toggle_theme_at(&settings_path())
}

pub fn toggle_theme_at(path: &Path) -> io::Result<Theme> {
    let mut settings = load_settings_from(path);
    settings.general.theme = settings.general.theme.toggled();
    save_settings_to(path, &settings)?;
    Ok(settings.general.theme)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
