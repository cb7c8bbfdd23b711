use crate::card::Card;
use crate::filter::{FilterCriteria, filter_cards};
use crate::loader::{LoadOptions, load_catalog_with};

/// The ordered cards of one loaded catalog.
///
/// Loading replaces the whole list; nothing from a previous file survives.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap cards that are already in display order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse catalog text and replace the current cards with it.
    pub fn load(&mut self, text: &str, options: &LoadOptions) {
        self.cards = load_catalog_with(text, options);
    }

    pub fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn filter(&self, criteria: &FilterCriteria, invert: bool) -> Vec<Card> {
        filter_cards(&self.cards, criteria, invert)
    }

    /// First card with this id.
    pub fn find_by_id(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Every card with this id; ids are not unique.
    pub fn find_all_by_id(&self, id: &str) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.id == id).collect()
    }

    /// Cards to show in a detail view for `id`.
    ///
    /// Always the cards with that id. With `also_by_name`, every card sharing
    /// the exact name of the first match joins them. Store order, no repeats.
    pub fn find_variants(&self, id: &str, also_by_name: bool) -> Vec<&Card> {
        let name = match (also_by_name, self.find_by_id(id)) {
            (true, Some(first)) => Some(first.name.as_str()),
            _ => None,
        };
        self.cards
            .iter()
            .filter(|c| c.id == id || name.is_some_and(|n| c.name == n))
            .collect()
    }
}
