pub(crate) mod card;
pub(crate) mod config;
pub(crate) mod games;
pub(crate) mod shop;
pub(crate) mod show;
pub(crate) mod stats;

use std::path::Path;

use tcg_binder_core::Language;
use tcg_binder_lib::{DisplayConfig, Session, Vocabulary, settings};

use crate::CliError;

/// Saved display settings with the `--lang` override applied.
pub(crate) fn display_config(lang: Option<Language>) -> DisplayConfig {
    let mut config = settings::load_settings().display_config();
    if let Some(lang) = lang {
        config.language = lang;
    }
    config
}

/// Load a catalog into a fresh session.
pub(crate) fn open_session(file: &Path, config: DisplayConfig) -> Result<Session, CliError> {
    let language = config.language;
    let mut session = Session::new(config);
    let count = session.load_file(file).map_err(|e| {
        let message = Vocabulary::new(language).label_or("csverror", "Error loading CSV file.");
        CliError::catalog(message, e)
    })?;
    log::debug!("Loaded {} cards from {}", count, file.display());
    Ok(session)
}

/// Name of the detected game, or the localized "Unknown".
pub(crate) fn game_label(session: &Session) -> String {
    match session.game() {
        Some(game) => game.display_name().to_string(),
        None => session.vocabulary().label_or("unknown", "Unknown").to_string(),
    }
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max).collect()
    }
}

/// Left-align `s` in a column of `width` characters, truncating if needed.
pub(crate) fn column(s: &str, width: usize) -> String {
    format!("{:<width$}", truncate_str(s, width), width = width)
}
