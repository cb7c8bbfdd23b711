//! HTML fragments for the collection table.
//!
//! The markup matches the classes and attributes the stylesheet expects, so
//! an exported table renders like the interactive one.

use tcg_binder_catalog::{Card, ParsedType, collection_tags, profit_label, strip_tags};
use tcg_binder_core::text::{clean_dashes, slugify};
use tcg_binder_core::{Game, find_badge_rule, rarity_key};

use crate::config::DisplayConfig;
use crate::vocabulary::Vocabulary;

/// Columns in a full row; the "nothing found" row spans all of them.
const TABLE_COLUMNS: usize = 15;

// ── Fixed badges ──────────────────────────────────────────────────────────

const QUALITY_BADGES: &[(&str, &str)] = &[
    ("mint", r#"<span class="badge badge-cond-mint" data-original-title="Mint">MT</span>"#),
    (
        "near mint",
        r#"<span class="badge badge-cond-near-mint" data-original-title="Near Mint">NM</span>"#,
    ),
    (
        "slightly played",
        r#"<span class="badge badge-cond-slightly-played" data-original-title="Slightly Played">SP</span>"#,
    ),
    (
        "moderately played",
        r#"<span class="badge badge-cond-moderately-played" data-original-title="Moderately Played">MP</span>"#,
    ),
    ("played", r#"<span class="badge badge-cond-played" data-original-title="Played">PL</span>"#),
    ("poor", r#"<span class="badge badge-cond-poor" data-original-title="Poor">PO</span>"#),
    ("unknown (good)", r#"<span class="badge" data-original-title="UnknownGood">✅</span>"#),
    ("unknown (bad)", r#"<span class="badge" data-original-title="UnknownBad">❌</span>"#),
];

const LANGUAGE_FLAGS: &[(&str, &str)] = &[
    ("IT", "🇮🇹"),
    ("EN", "🇺🇸"),
    ("DE", "🇩🇪"),
    ("FR", "🇫🇷"),
    ("JP", "🇯🇵"),
];

/// Condition badge. `None` renders nothing; unrecognized text is returned
/// as is.
pub fn quality_badge(quality: &str) -> String {
    let lower = quality.to_lowercase();
    if lower == "none" {
        return String::new();
    }
    QUALITY_BADGES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, html)| html.to_string())
        .unwrap_or_else(|| escape_html(quality))
}

/// Language cell: a flag for known codes, otherwise the upper-cased code.
pub fn language_badge(language: &str) -> String {
    let code = language.trim().to_uppercase();
    let shown = LANGUAGE_FLAGS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, flag)| flag.to_string())
        .unwrap_or_else(|| escape_html(&code));
    format!(r#"<span data-cell-title="Language">{shown}</span>"#)
}

/// Numbered edition badge: 1 first, 0 limited, 2 standard, 3 anything else.
///
/// With `strict`, standard and unrecognized editions render an empty
/// placeholder instead of a number.
pub fn edition_badge(edition: &str, strict: bool) -> String {
    let lower = edition.to_lowercase();
    let (number, accepted) = if lower.contains("first") {
        (1, true)
    } else if lower.contains("limited") {
        (0, true)
    } else if lower.contains("standard") {
        (2, !strict)
    } else {
        (3, !strict)
    };
    let title = escape_html(edition);
    if accepted {
        format!(
            r#"<span class="edition-badge edition-badge-{number}" data-original-title="{title}">{number}</span>"#
        )
    } else {
        format!(r#"<span class="null" data-original-title="{title}"></span>"#)
    }
}

/// Escape text for use inside HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_fake(card: &Card) -> bool {
    card.rarity.eq_ignore_ascii_case("fake")
}

// ── Vocabulary-aware rendering ────────────────────────────────────────────

/// Renders cards for one game in one language.
#[derive(Debug, Clone, Copy)]
pub struct BadgeRenderer<'a> {
    vocabulary: &'a Vocabulary,
    game: Option<Game>,
}

impl<'a> BadgeRenderer<'a> {
    pub fn new(vocabulary: &'a Vocabulary, game: Option<Game>) -> Self {
        Self { vocabulary, game }
    }

    /// Translated base type followed by one badge per recognized sub-type.
    ///
    /// Each token is looked up by its slug, then by the slug without dashes.
    /// Tokens without a badge rule are dropped.
    pub fn type_display(&self, type_text: &str) -> String {
        let parsed = ParsedType::parse(type_text);
        let mut badges = Vec::new();
        for token in &parsed.tokens {
            let slug = slugify(token);
            let compact = slug.replace('-', "");
            let Some(rule) = find_badge_rule(self.game, &slug)
                .or_else(|| find_badge_rule(self.game, &compact))
            else {
                log::debug!("No badge rule for token '{}' (tried {}, {})", token, slug, compact);
                continue;
            };
            let label = clean_dashes(self.vocabulary.label_or(rule.key, token));
            badges.push(format!(
                r#"<span class="{}">{}</span>"#,
                rule.css_class,
                escape_html(&label)
            ));
        }

        let base = self
            .vocabulary
            .label_or(&slugify(&parsed.base), &parsed.base)
            .replace("——", "—")
            .replace("— ", "");
        let base = escape_html(&base);
        if badges.is_empty() {
            base
        } else {
            format!("{} {}", base, badges.join(" "))
        }
    }

    /// Rarity cell: the FAKE badge, the translated rarity, or the raw text.
    pub fn rarity_label(&self, rarity: &str) -> String {
        if rarity.eq_ignore_ascii_case("fake") {
            let label = self.vocabulary.label_or("fake", "FAKE");
            return format!(r#"<span class="badge-type-fake">{}</span>"#, escape_html(label));
        }
        escape_html(self.vocabulary.label_or(&rarity_key(rarity), rarity))
    }

    /// Name cell, flagged when the card is a fake.
    pub fn name_cell(&self, card: &Card) -> String {
        let name = escape_html(&card.name);
        if is_fake(card) {
            format!("{} <b>({})</b>", name, self.vocabulary.label_or("fake", "FAKE"))
        } else {
            name
        }
    }

    fn comments_cell(&self, card: &Card, config: &DisplayConfig, stonks: bool) -> String {
        if stonks {
            return profit_label(card);
        }
        if !config.enable_collections {
            return escape_html(&strip_tags(&card.comments));
        }
        let mut html = escape_html(&strip_tags(&card.comments));
        for tag in collection_tags(&card.comments) {
            if !html.is_empty() {
                html.push(' ');
            }
            html.push_str(&format!(
                r#"<button class="tag-button" data-value="{0}">{0}</button>"#,
                escape_html(&tag)
            ));
        }
        html
    }

    /// One `<tr>` per card, in order. `stonks` replaces comments with the
    /// profit label, as when sorting by profit.
    pub fn render_rows(&self, cards: &[Card], config: &DisplayConfig, stonks: bool) -> String {
        if cards.is_empty() {
            let message = self.vocabulary.label_or("nothingfound", "Nothing found.");
            return format!(
                r#"<tr><td colspan="{}">{}</td></tr>"#,
                TABLE_COLUMNS,
                escape_html(message)
            );
        }

        let td = if config.allow_newlines {
            "<td>"
        } else {
            r#"<td class="nowrap-td">"#
        };
        let mut out = String::new();
        for card in cards {
            let mut cells: Vec<String> = Vec::with_capacity(TABLE_COLUMNS);
            if config.show_images {
                let path = card.local_image_path();
                if path.is_empty() {
                    cells.push(String::new());
                } else {
                    cells.push(format!(
                        r#"<img src="{}" alt="X" class="card-image">"#,
                        escape_html(&path)
                    ));
                }
            }
            cells.push(self.name_cell(card));
            cells.push(self.type_display(&card.card_type));
            cells.push(self.rarity_label(&card.rarity));
            cells.push(quality_badge(&card.quality).replace("None", ""));
            cells.push(language_badge(&card.language).replace("None", "").replace("NONE", ""));
            cells.push(edition_badge(&card.edition.replace("None", ""), config.strict_editions));
            cells.push(format!("{:.2}", card.price_paid()));
            cells.push(escape_html(card.market_price()));
            cells.push(escape_html(&card.id));

            out.push_str("<tr>");
            for cell in &cells {
                out.push_str(td);
                out.push_str(cell);
                out.push_str("</td>");
            }
            out.push_str(&format!(
                r#"<td style="display:none">{} </td>"#,
                escape_html(&card.pack_id)
            ));
            for cell in [
                escape_html(&card.date_obtained),
                escape_html(&card.location),
                self.comments_cell(card, config, stonks),
                self.wiki_cell(card),
            ] {
                out.push_str(td);
                out.push_str(&cell);
                out.push_str("</td>");
            }
            out.push_str("</tr>\n");
        }
        out
    }

    fn wiki_cell(&self, card: &Card) -> String {
        if card.wiki_url.is_empty() {
            return String::new();
        }
        format!(
            r#"<a class="wiki-button" href="{}" target="_blank">{}</a>"#,
            escape_html(&card.wiki_url),
            escape_html(self.vocabulary.label_or("go", "Go"))
        )
    }
}

#[cfg(test)]
#[path = "tests/badges_tests.rs"]
mod tests;
