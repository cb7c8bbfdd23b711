use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use tcg_binder_core::{FilterOption, Game, Language};
use tcg_binder_lib::Vocabulary;

pub(crate) fn run_games(options: Option<Game>, lang: Option<Language>) {
    match options {
        Some(game) => print_options(game, super::display_config(lang).language),
        None => print_games(),
    }
}

fn print_games() {
    log::info!("{}", "Supported games:".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();
    for game in Game::all() {
        log::info!(
            "  {} [{}]",
            game.short_name().if_supports_color(Stdout, |t| t.bold()),
            game.display_name().if_supports_color(Stdout, |t| t.cyan()),
        );
        if !game.aliases().is_empty() {
            log::info!("    Aliases: {}", game.aliases().join(", "));
        }
        log::info!(
            "    Rarities: {}",
            game.rarity_order().labels().collect::<Vec<_>>().join(", ")
        );
    }
}

fn print_options(game: Game, language: Language) {
    let vocabulary = Vocabulary::for_game(Some(game), language);
    log::info!("{}", game.display_name().if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();
    log::info!("Type filter:");
    print_option_list(&vocabulary, game.type_filter_options(), "--type");
    crate::log_blank();
    log::info!("Rarity filter:");
    print_option_list(&vocabulary, game.rarity_filter_options(), "--rarity");
}

fn print_option_list(vocabulary: &Vocabulary, options: &[FilterOption], flag: &str) {
    for option in options {
        match option.key {
            None => log::info!("  {}", option.value.if_supports_color(Stdout, |t| t.dimmed())),
            Some(key) => {
                let label = vocabulary.label_or(key, option.value);
                if option.value.is_empty() {
                    log::info!("  {}", label);
                } else {
                    log::info!(
                        "  {:<32} {}",
                        label,
                        format!("{} \"{}\"", flag, option.value)
                            .if_supports_color(Stdout, |t| t.dimmed()),
                    );
                }
            }
        }
    }
}
