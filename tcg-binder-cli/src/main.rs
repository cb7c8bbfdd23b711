//! tcg-binder CLI
//!
//! Command-line interface for browsing trading card collection catalogs and
//! shop/wishlist data.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction, ShopAction};
pub(crate) use error::CliError;
pub(crate) use logger::log_blank;

fn main() {
    let cli = Cli::parse();
    logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref());

    let lang = cli.lang;
    let result = match cli.command {
        Commands::Games { options } => {
            commands::games::run_games(options, lang);
            Ok(())
        }
        Commands::Show(args) => commands::show::run_show(args, lang),
        Commands::Card { file, id, by_name } => commands::card::run_card(&file, &id, by_name, lang),
        Commands::Stats { file } => commands::stats::run_stats(&file, lang),
        Commands::Shop {
            data,
            wishlist,
            action,
        } => match action {
            ShopAction::Categories => commands::shop::run_categories(&data),
            ShopAction::Items { path } => commands::shop::run_items(&data, &path, wishlist),
            ShopAction::Product { path, id, shipping } => {
                commands::shop::run_product(&data, &path, &id, wishlist, shipping)
            }
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Theme { value } => commands::config::run_config_theme(value.as_deref()),
            ConfigAction::Set { key, value } => commands::config::run_config_set(&key, &value),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        log::logger().flush();
        std::process::exit(1);
    }
}
