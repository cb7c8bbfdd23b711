use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use tcg_binder_catalog::{Card, FilterCriteria, ParsedType, SortKey};
use tcg_binder_core::Language;
use tcg_binder_lib::{Query, Session};

use crate::CliError;
use crate::cli_types::{FilterArgs, ShowArgs};

use super::{column, display_config, game_label, open_session};

pub(crate) fn run_show(args: ShowArgs, lang: Option<Language>) -> Result<(), CliError> {
    let mut config = display_config(lang);
    config.invert_filters |= args.filters.invert;
    config.genesys |= args.genesys;
    config.show_images |= args.images;
    if args.no_duplicates {
        config.show_duplicates = false;
    }

    let session = open_session(&args.file, config)?;
    let sort = args.sort.as_deref().and_then(|s| {
        let key = SortKey::parse(s);
        if key.is_none() {
            log::warn!("Unknown sort key '{}'; keeping the catalog order", s);
        }
        key
    });
    let query = Query {
        criteria: criteria(&args.filters),
        sort,
        reverse: args.reverse,
        tag: args.tag.clone(),
    };
    let result = session.query(&query);

    if args.html {
        log::info!("{}", session.render_rows(&result.cards, sort));
        return Ok(());
    }

    log::info!(
        "{} {}",
        "Game:".if_supports_color(Stdout, |t| t.bold()),
        game_label(&session).if_supports_color(Stdout, |t| t.cyan()),
    );
    crate::log_blank();
    print_table(&session, &result.cards, sort == Some(SortKey::Stonks));
    crate::log_blank();
    log::info!("{}", session.result_summary(&result).trim_start_matches([' ', '-']));
    log::info!("{}", session.total_spent_line(&result.totals));
    Ok(())
}

pub(crate) fn criteria(filters: &FilterArgs) -> FilterCriteria {
    FilterCriteria {
        name: filters.name.clone(),
        type_filter: filters.card_type.clone(),
        rarity: filters.rarity.clone(),
        quality: filters.quality.clone(),
        language: filters.language.clone(),
        edition: filters.edition.clone(),
    }
}

/// Plain type text: translated base followed by the sub-type tokens.
pub(crate) fn type_text(session: &Session, card_type: &str) -> String {
    let parsed = ParsedType::parse(card_type);
    let vocabulary = session.vocabulary();
    let slug = tcg_binder_core::text::slugify(&parsed.base);
    let base = tcg_binder_core::text::clean_dashes(vocabulary.label_or(&slug, &parsed.base));
    if parsed.tokens.is_empty() {
        base
    } else {
        format!("{} ({})", base, parsed.tokens.join("/"))
    }
}

fn print_table(session: &Session, cards: &[Card], stonks: bool) {
    let vocabulary = session.vocabulary();
    let header = [
        column(vocabulary.label_or("tableName", "Name"), 32),
        column(vocabulary.label_or("tableType", "Type"), 26),
        column(vocabulary.label_or("tableRarity", "Rarity"), 16),
        column(vocabulary.label_or("tableQuality", "Condition"), 12),
        column(vocabulary.label_or("tableLanguage", "Lang."), 6),
        column(vocabulary.label_or("tableSpent", "Spent"), 8),
        column(vocabulary.label_or("tableMarket", "Market"), 8),
        column(vocabulary.label_or("tableId", "ID"), 12),
        vocabulary.label_or("tableComments", "Comments").to_string(),
    ]
    .join(" ");
    log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));

    if cards.is_empty() {
        log::info!(
            "{}",
            vocabulary
                .label_or("nothingfound", "Nothing found.")
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }

    for card in cards {
        let mut name = card.name.clone();
        if card.rarity.eq_ignore_ascii_case("fake") {
            name.push_str(&format!(" ({})", vocabulary.label_or("fake", "FAKE")));
        }
        let rarity = vocabulary.label_or(&tcg_binder_core::rarity_key(&card.rarity), &card.rarity);
        let comments = if stonks {
            tcg_binder_catalog::profit_label(card)
        } else {
            tcg_binder_catalog::strip_tags(&card.comments)
        };
        let row = [
            column(&name, 32),
            column(&type_text(session, &card.card_type), 26),
            column(rarity, 16),
            column(&card.quality, 12),
            column(&card.language.to_uppercase(), 6),
            column(&format!("{:.2}", card.price_paid()), 8),
            column(&card.clean_market_price(), 8),
            column(&card.id, 12),
            comments,
        ]
        .join(" ");
        log::info!("{}", row.trim_end());
    }
}
