use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use tcg_binder_catalog::CountRow;
use tcg_binder_core::Language;

use crate::CliError;

use super::{column, display_config, game_label, open_session};

pub(crate) fn run_stats(file: &Path, lang: Option<Language>) -> Result<(), CliError> {
    let session = open_session(file, display_config(lang))?;
    let stats = session.stats();

    log::info!(
        "{}",
        "Collection Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Catalog: {}", file.display());
    log::info!("  Game:    {}", game_label(&session));
    log::info!("  Cards:   {}", session.cards().len());
    crate::log_blank();

    print_counts("Packs", &stats.packs);
    crate::log_blank();
    print_counts("Locations", &stats.locations);
    crate::log_blank();

    log::info!("{}", "Duplicates".if_supports_color(Stdout, |t| t.bold()));
    if stats.duplicates.is_empty() {
        log::info!("  {}", "none".if_supports_color(Stdout, |t| t.dimmed()));
    }
    for (name, count) in &stats.duplicates {
        log::info!("  {} {:>5}", column(name, 40), count);
    }
    Ok(())
}

fn print_counts(title: &str, rows: &[CountRow]) {
    log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
    if rows.is_empty() {
        log::info!("  {}", "none".if_supports_color(Stdout, |t| t.dimmed()));
    }
    for row in rows {
        log::info!("  {} {:>5} {:>6.1}%", column(&row.label, 40), row.count, row.percentage);
    }
}
