use serde::{Deserialize, Serialize};

/// Display language of the vocabulary and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "it")]
    Italian,
}

impl Language {
    /// Two-letter code used in settings and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Italian => "it",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Italian]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when a string cannot be parsed into a `Language`.
#[derive(Debug, Clone)]
pub struct LanguageParseError(pub String);

impl std::fmt::Display for LanguageParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown language: '{}' (expected 'en' or 'it')", self.0)
    }
}

impl std::error::Error for LanguageParseError {}

impl std::str::FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "it" | "italian" | "italiano" => Ok(Self::Italian),
            _ => Err(LanguageParseError(s.to_string())),
        }
    }
}
