use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use tcg_binder_core::Language;

use crate::CliError;

use super::show::type_text;
use super::{display_config, open_session};

/// Print every copy of the card with `id`, and with `by_name` every card
/// sharing its name.
pub(crate) fn run_card(
    file: &Path,
    id: &str,
    by_name: bool,
    lang: Option<Language>,
) -> Result<(), CliError> {
    let session = open_session(file, display_config(lang))?;
    let variants = session.find_variants(id, by_name);
    if variants.is_empty() {
        return Err(CliError::not_found(format!("no card with ID '{}'", id)));
    }

    let vocabulary = session.vocabulary();
    let unknown = vocabulary.label_or("unknown", "Unknown");
    let or_unknown = |s: &str| {
        if s.trim().is_empty() {
            unknown.to_string()
        } else {
            s.to_string()
        }
    };
    let field = |key: &str, fallback: &str, value: &str| {
        log::info!("  {:<10} {}", vocabulary.label_or(key, fallback), value);
    };

    for (i, card) in variants.iter().enumerate() {
        if i > 0 {
            crate::log_blank();
        }
        log::info!(
            "{} {}",
            card.name.if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", or_unknown(&card.id)).if_supports_color(Stdout, |t| t.cyan()),
        );
        field("tableType", "Type", &type_text(&session, &card.card_type));
        field("tableRarity", "Rarity", &or_unknown(&card.rarity));
        field("tableQuality", "Condition", &or_unknown(&card.quality));
        field("tableLanguage", "Lang.", &or_unknown(&card.language));
        field("tableEdition", "Edit.", &or_unknown(&card.edition));
        field("tableSpent", "Spent", &format!("{:.2}", card.price_paid()));
        field("tableMarket", "Market", &or_unknown(&card.clean_market_price()));
        field("tableObtained", "Obt.", &or_unknown(&card.date_obtained));
        field("tableLocation", "Loc.", &or_unknown(&card.location));
        if !card.comments.is_empty() {
            field("tableComments", "Comments", &card.comments);
        }
        let image = card.local_image_path();
        if !image.is_empty() {
            field("tableImage", "IMG", &image);
        }
        if !card.wiki_url.is_empty() {
            field("tableWiki", "Wiki", &card.wiki_url);
        }
    }
    Ok(())
}
