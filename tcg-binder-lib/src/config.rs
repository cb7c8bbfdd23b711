//! Display configuration passed explicitly to the session and renderer.

use serde::{Deserialize, Serialize};
use tcg_binder_catalog::ViewOptions;
use tcg_binder_core::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("unknown theme: '{s}' (expected 'light' or 'dark')")),
        }
    }
}

/// How cards are presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub show_images: bool,
    /// Let table cells wrap; otherwise every cell is `nowrap`.
    pub allow_newlines: bool,
    pub language: Language,
    pub invert_filters: bool,
    /// Render `[tag]` comments as collection buttons instead of hiding them.
    pub enable_collections: bool,
    pub show_duplicates: bool,
    pub genesys: bool,
    /// Hide badges for standard and unrecognized editions.
    pub strict_editions: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_images: false,
            allow_newlines: false,
            language: Language::English,
            invert_filters: false,
            enable_collections: false,
            show_duplicates: true,
            genesys: false,
            strict_editions: false,
        }
    }
}

impl DisplayConfig {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            genesys: self.genesys,
            show_duplicates: self.show_duplicates,
        }
    }
}
