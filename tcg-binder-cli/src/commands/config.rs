use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use tcg_binder_lib::{Theme, settings};

use crate::CliError;

/// Print the settings file, or the defaults when there is none.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings::settings_path();
    log::info!(
        "{}",
        "tcg-binder Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let settings = settings::load_settings();
    let general = &settings.general;
    let display = &settings.display;
    log::info!("  general.theme              = {}", general.theme);
    log::info!("  general.language           = {}", general.language);
    log::info!("  display.show_images        = {}", display.show_images);
    log::info!("  display.allow_newlines     = {}", display.allow_newlines);
    log::info!("  display.invert_filters     = {}", display.invert_filters);
    log::info!("  display.enable_collections = {}", display.enable_collections);
    log::info!("  display.show_duplicates    = {}", display.show_duplicates);
    log::info!("  display.genesys            = {}", display.genesys);
    log::info!("  display.strict_editions    = {}", display.strict_editions);

    if let Some(raw) = settings::load_settings_string() {
        log::debug!("Raw settings file:\n{}", raw);
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Show the theme, toggle it, or set it explicitly.
pub(crate) fn run_config_theme(value: Option<&str>) -> Result<(), CliError> {
    let theme = match value {
        None => settings::load_settings().general.theme,
        Some("toggle") => settings::toggle_theme()?,
        Some(v) => {
            let theme: Theme = v.parse().map_err(CliError::config)?;
            let mut current = settings::load_settings();
            current.general.theme = theme;
            settings::save_settings(&current)?;
            theme
        }
    };
    log::info!("Theme: {}", theme.if_supports_color(Stdout, |t| t.bold()));
    Ok(())
}

/// Set one value and save.
pub(crate) fn run_config_set(key: &str, value: &str) -> Result<(), CliError> {
    let mut current = settings::load_settings();
    current.set(key, value).map_err(CliError::config)?;
    settings::save_settings(&current)?;
    log::info!(
        "{} {} = {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        key,
        value
    );
    Ok(())
}
