//! Display-time narrowing applied after filtering.

use std::collections::HashSet;

use tcg_binder_core::Game;

use crate::card::Card;

/// Types excluded by the Genesys format.
const GENESYS_BANNED: &[&str] = &["Link", "Pendulum"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Hide Link and Pendulum cards (Yu-Gi-Oh only).
    pub genesys: bool,
    /// When false, keep only the first card of each name.
    pub show_duplicates: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            genesys: false,
            show_duplicates: true,
        }
    }
}

/// Apply view options, preserving order.
pub fn apply_view(cards: Vec<Card>, game: Option<Game>, options: &ViewOptions) -> Vec<Card> {
    let mut cards = cards;
    if options.genesys && game == Some(Game::YuGiOh) {
        cards.retain(|card| !GENESYS_BANNED.iter().any(|t| card.card_type.contains(t)));
    }
    if !options.show_duplicates {
        let mut seen = HashSet::new();
        cards.retain(|card| seen.insert(card.name.clone()));
    }
    cards
}

/// Number of distinct card names.
pub fn unique_names(cards: &[Card]) -> usize {
    cards
        .iter()
        .map(|c| c.name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    fn sample() -> Vec<Card> {
        vec![
            Card::new("Decode Talker", "Monster (Link-3/Effect)"),
            Card::new("Odd-Eyes", "Monster (Pendulum/Effect)"),
            Card::new("Dark Magician", "Monster (Normal)"),
            Card::new("Dark Magician", "Monster (Normal)"),
        ]
    }

    #[test]
    fn genesys_only_applies_to_yugioh() {
        let opts = ViewOptions {
            genesys: true,
            ..ViewOptions::default()
        };
        let ygo = apply_view(sample(), Some(Game::YuGiOh), &opts);
        assert_eq!(names(&ygo), vec!["Dark Magician", "Dark Magician"]);
        let other = apply_view(sample(), Some(Game::Pokemon), &opts);
        assert_eq!(other.len(), 4);
    }

    #[test]
    fn hiding_duplicates_keeps_first_copy() {
        let opts = ViewOptions {
            show_duplicates: false,
            ..ViewOptions::default()
        };
        let shown = apply_view(sample(), None, &opts);
        assert_eq!(shown.len(), 3);
        assert_eq!(unique_names(&sample()), 3);
    }
}
