//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use tcg_binder_core::{Game, Language};

#[derive(Parser)]
#[command(name = "tcg-binder")]
#[command(about = "Browse trading card collection catalogs", long_about = None)]
pub(crate) struct Cli {
    /// Display language (en, it); overrides the saved setting
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter arguments shared by commands that list cards.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Part of the card name
    #[arg(long)]
    pub name: Option<String>,

    /// Type filter, e.g. "Monster", "Effect" or "Monster (Effect/XYZ)"
    #[arg(long = "type")]
    pub card_type: Option<String>,

    /// Exact rarity
    #[arg(long)]
    pub rarity: Option<String>,

    /// Exact condition
    #[arg(long)]
    pub quality: Option<String>,

    /// Exact card language code
    #[arg(long)]
    pub language: Option<String>,

    /// Exact edition
    #[arg(long)]
    pub edition: Option<String>,

    /// Invert every active filter
    #[arg(long)]
    pub invert: bool,
}

#[derive(Args, Clone)]
pub(crate) struct ShowArgs {
    /// Catalog file (pipe-delimited, header row first)
    pub file: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Sort key (name, type, rarity, condition, edition, price, market,
    /// date, stonks, id, location, language, comments)
    #[arg(long)]
    pub sort: Option<String>,

    /// Reverse the final order
    #[arg(long)]
    pub reverse: bool,

    /// Hide Link and Pendulum cards (Yu-Gi-Oh only)
    #[arg(long)]
    pub genesys: bool,

    /// Show only the first card of each name
    #[arg(long)]
    pub no_duplicates: bool,

    /// Only cards tagged [TAG] or {TAG} in their comments
    #[arg(long)]
    pub tag: Option<String>,

    /// Print HTML table rows instead of a text table
    #[arg(long)]
    pub html: bool,

    /// Include an image column in HTML output
    #[arg(long)]
    pub images: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List supported games
    Games {
        /// Show the type and rarity filter options of one game
        #[arg(long)]
        options: Option<Game>,
    },

    /// Load a catalog and print the filtered, sorted cards
    Show(ShowArgs),

    /// Show every copy of a card
    Card {
        /// Catalog file
        file: PathBuf,

        /// Card ID, e.g. LOB-005
        id: String,

        /// Also include cards with the same name
        #[arg(long)]
        by_name: bool,
    },

    /// Pack, location and duplicate statistics for a catalog
    Stats {
        /// Catalog file
        file: PathBuf,
    },

    /// Browse shop or wishlist data
    Shop {
        /// Data directory holding categories.json and the category files
        #[arg(long, global = true, default_value = "data")]
        data: PathBuf,

        /// Price items as wishlist donations instead of shop sales
        #[arg(long, global = true)]
        wishlist: bool,

        #[command(subcommand)]
        action: ShopAction,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ShopAction {
    /// List categories that have products
    Categories,

    /// List subcategories and products under a category path
    Items {
        /// Category path, e.g. yugioh/sealed
        path: String,
    },

    /// Show one product with its price breakdown
    Product {
        /// Category path holding the product
        path: String,

        /// Product ID
        id: String,

        /// Add optional shipping
        #[arg(long)]
        shipping: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the current settings
    Show,

    /// Print the settings file path
    Path,

    /// Show or change the theme (light, dark, toggle)
    Theme {
        value: Option<String>,
    },

    /// Set a value, e.g. `display.genesys true`
    Set {
        key: String,
        value: String,
    },
}
