//! Card filter engine.
//!
//! Each active criterion is an independent test; a card passes when every
//! active test passes. With `invert` set, each test's result is negated on
//! its own before the tests are combined, so inverting a two-field query
//! keeps only cards that fail *both* fields.

use tcg_binder_core::text::strip_dash_prefix;

use crate::card::Card;
use crate::tags::normalize_tag_brackets;
use crate::type_parser::ParsedType;

/// Optional constraints; `None` and empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: Option<String>,
    pub type_filter: Option<String>,
    pub rarity: Option<String>,
    pub quality: Option<String>,
    pub language: Option<String>,
    pub edition: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.type_filter,
            &self.rarity,
            &self.quality,
            &self.language,
            &self.edition,
        ]
        .iter()
        .all(|field| active(field).is_none())
    }

    /// Whether `card` passes every active test.
    pub fn matches(&self, card: &Card, invert: bool) -> bool {
        let tests: [(Option<&str>, fn(&Card, &str) -> bool); 6] = [
            (active(&self.name), name_matches),
            (active(&self.type_filter), type_matches),
            (active(&self.rarity), rarity_matches),
            (active(&self.quality), quality_matches),
            (active(&self.language), language_matches),
            (active(&self.edition), edition_matches),
        ];
        tests.iter().all(|(value, test)| match value {
            Some(filter) => test(card, filter) != invert,
            None => true,
        })
    }
}

fn active(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn rarity_matches(card: &Card, filter: &str) -> bool {
    eq_ignore_case(&card.rarity, filter)
}

fn quality_matches(card: &Card, filter: &str) -> bool {
    eq_ignore_case(&card.quality, filter)
}

fn language_matches(card: &Card, filter: &str) -> bool {
    eq_ignore_case(&card.language, filter)
}

fn edition_matches(card: &Card, filter: &str) -> bool {
    eq_ignore_case(&card.edition, filter)
}

fn name_matches(card: &Card, filter: &str) -> bool {
    let name = strip_dash_prefix(&card.name.to_lowercase());
    let wanted = strip_dash_prefix(&filter.to_lowercase());
    name.contains(&wanted)
}

/// Type test.
///
/// A filter with parentheses is parsed like a card type: bases must be equal
/// and every filter token must be among the card's tokens. The shorthand
/// token `xyz` instead accepts any type containing `xyz)`, which covers the
/// CXYZ/FXYZ/SXYZ variants. Without parentheses the filter is a `/` list and
/// one token found inside the card's base or any of its tokens is enough.
pub fn type_matches(card: &Card, filter: &str) -> bool {
    let parsed = ParsedType::parse(&card.card_type);
    let card_base = parsed.base_lower();
    let card_tokens = parsed.tokens_lower();

    if filter.contains('(') {
        let wanted = ParsedType::parse(filter);
        if card_base != wanted.base_lower() {
            return false;
        }
        let full_type = card.card_type.trim().to_lowercase();
        wanted.tokens_lower().iter().all(|token| {
            if token == "xyz" {
                full_type.contains("xyz)")
            } else {
                card_tokens.contains(token)
            }
        })
    } else {
        let lowered = filter.trim().to_lowercase();
        let tokens: Vec<&str> = lowered
            .split('/')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return true;
        }
        tokens.iter().any(|token| {
            card_base.contains(token) || card_tokens.iter().any(|t| t.contains(token))
        })
    }
}

/// Cards passing `criteria`, in their original relative order.
pub fn filter_cards(cards: &[Card], criteria: &FilterCriteria, invert: bool) -> Vec<Card> {
    cards
        .iter()
        .filter(|card| criteria.matches(card, invert))
        .cloned()
        .collect()
}

/// Cards whose comments carry the collection tag `[tag]` (or `{tag}`).
pub fn filter_by_tag(cards: &[Card], tag: &str) -> Vec<Card> {
    let needle = format!("[{tag}]");
    cards
        .iter()
        .filter(|card| normalize_tag_brackets(&card.comments).contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, card_type: &str) -> Card {
        Card::new(name, card_type)
    }

    #[test]
    fn empty_strings_are_inactive() {
        let criteria = FilterCriteria {
            name: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert!(criteria.is_empty());
        assert!(criteria.matches(&card("Anything", "Spell"), false));
    }

    #[test]
    fn name_ignores_dash_markers() {
        let c = card("—— Galaxy-Eyes", "Monster (XYZ)");
        assert!(name_matches(&c, "galaxy"));
        assert!(name_matches(&c, "— Galaxy-Eyes"));
        assert!(!name_matches(&c, "photon"));
    }

    #[test]
    fn unparenthesized_type_needs_one_token() {
        let c = card("A", "Monster (Effect/Tuner)");
        assert!(type_matches(&c, "ritual/tuner"));
        assert!(type_matches(&c, "monst"));
        assert!(!type_matches(&c, "spell/trap"));
    }

    #[test]
    fn separator_only_type_filter_matches_everything() {
        assert!(type_matches(&card("A", "Spell"), " / "));
    }
}
