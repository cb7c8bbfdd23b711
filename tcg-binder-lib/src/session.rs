//! One loaded catalog and everything derived from it.

use std::path::Path;

use tcg_binder_catalog::{
    Card, CardStore, CountRow, FilterCriteria, LoadOptions, SortContext, SortKey, Totals,
    apply_view, cards_from_records, duplicate_names, filter_by_tag, location_stats, pack_stats,
    parse_records, read_catalog_text, reverse, sort_baseline, sort_cards, total_spent,
    unique_names,
};
use tcg_binder_core::{FilterOption, Game, GameDetector, Language};

use crate::badges::BadgeRenderer;
use crate::config::DisplayConfig;
use crate::error::SessionError;
use crate::vocabulary::Vocabulary;

/// Proof that a load was started; only the newest ticket may finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A translated dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    /// Separators are shown but cannot be chosen.
    pub disabled: bool,
}

/// What to show from the loaded catalog.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub criteria: FilterCriteria,
    pub sort: Option<SortKey>,
    pub reverse: bool,
    /// Only cards carrying this collection tag.
    pub tag: Option<String>,
}

#[derive(Debug, Clone)]
pub struct QueryResult {
    pub cards: Vec<Card>,
    pub unique_names: usize,
    /// Spending over `cards`.
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStats {
    pub packs: Vec<CountRow>,
    pub locations: Vec<CountRow>,
    pub duplicates: Vec<(String, usize)>,
}

/// The cards, detected game, vocabulary and display settings of one
/// catalog. Loading a new catalog replaces all of it.
pub struct Session {
    store: CardStore,
    game: Option<Game>,
    vocabulary: Vocabulary,
    config: DisplayConfig,
    load_options: LoadOptions,
    generation: u64,
    detector: GameDetector,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

impl Session {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            store: CardStore::new(),
            game: None,
            vocabulary: Vocabulary::new(config.language),
            config,
            load_options: LoadOptions::default(),
            generation: 0,
            detector: GameDetector::new(),
        }
    }

    pub fn with_load_options(mut self, options: LoadOptions) -> Self {
        self.load_options = options;
        self
    }

    pub fn with_detector(mut self, detector: GameDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn game(&self) -> Option<Game> {
        self.game
    }

    pub fn cards(&self) -> &[Card] {
        self.store.cards()
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DisplayConfig) {
        self.vocabulary.set_language(config.language);
        self.config = config;
    }

    pub fn set_language(&mut self, language: Language) {
        self.config.language = language;
        self.vocabulary.set_language(language);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ── Loading ───────────────────────────────────────────────────────────

    /// Start a load. Any ticket handed out earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Finish a load started with [`Session::begin_load`], replacing the
    /// whole session state. Returns the number of cards loaded.
    pub fn finish_load(&mut self, ticket: LoadTicket, text: &str) -> Result<usize, SessionError> {
        if ticket.generation != self.generation {
            return Err(SessionError::StaleLoad {
                ticket: ticket.generation,
                current: self.generation,
            });
        }
        let records = parse_records(text, &self.load_options);
        let game = self.detector.detect(records.iter().map(|r| r.get("Type")));
        self.vocabulary.reset(game);
        let mut cards = cards_from_records(&records);
        sort_baseline(&mut cards, self.vocabulary.number_word());
        self.game = game;
        self.store.replace(cards);
        log::debug!("Loaded {} cards", self.store.len());
        Ok(self.store.len())
    }

    pub fn load_text(&mut self, text: &str) -> usize {
        let ticket = self.begin_load();
        // A fresh ticket is always current.
        self.finish_load(ticket, text).unwrap_or(0)
    }

    pub fn load_file(&mut self, path: &Path) -> Result<usize, SessionError> {
        let ticket = self.begin_load();
        let text = read_catalog_text(path)?;
        self.finish_load(ticket, &text)
    }

    // ── Dropdowns ─────────────────────────────────────────────────────────

    /// Type filter entries for the detected game; empty when unknown.
    pub fn type_options(&self) -> Vec<DropdownOption> {
        self.game
            .map(|g| self.translate_options(g.type_filter_options()))
            .unwrap_or_default()
    }

    /// Rarity filter entries for the detected game; empty when unknown.
    pub fn rarity_options(&self) -> Vec<DropdownOption> {
        self.game
            .map(|g| self.translate_options(g.rarity_filter_options()))
            .unwrap_or_default()
    }

    fn translate_options(&self, options: &[FilterOption]) -> Vec<DropdownOption> {
        options
            .iter()
            .map(|option| match option.key {
                Some(key) => DropdownOption {
                    value: option.value.to_string(),
                    label: self.vocabulary.label_or(key, option.value).to_string(),
                    disabled: false,
                },
                None => DropdownOption {
                    value: option.value.to_string(),
                    label: option.value.to_string(),
                    disabled: true,
                },
            })
            .collect()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn sort_context(&self) -> SortContext {
        SortContext {
            game: self.game,
            number_word: self.vocabulary.number_word().to_string(),
        }
    }

    /// Filter, sort and narrow the cards for display.
    pub fn query(&self, query: &Query) -> QueryResult {
        let mut cards = self.store.filter(&query.criteria, self.config.invert_filters);
        if let Some(tag) = query.tag.as_deref().filter(|t| !t.is_empty()) {
            cards = filter_by_tag(&cards, tag);
        }
        sort_cards(&mut cards, query.sort, &self.sort_context());
        let mut cards = apply_view(cards, self.game, &self.config.view_options());
        if query.reverse {
            reverse(&mut cards);
        }
        QueryResult {
            unique_names: unique_names(&cards),
            totals: total_spent(&cards),
            cards,
        }
    }

    /// Every card tagged `tag`, in store order.
    pub fn tag_matches(&self, tag: &str) -> Vec<Card> {
        filter_by_tag(self.store.cards(), tag)
    }

    pub fn find_variants(&self, id: &str, also_by_name: bool) -> Vec<&Card> {
        self.store.find_variants(id, also_by_name)
    }

    pub fn stats(&self) -> CollectionStats {
        let unknown = self.vocabulary.label_or("unknown", "Unknown");
        let cards = self.store.cards();
        CollectionStats {
            packs: pack_stats(cards),
            locations: location_stats(cards, unknown),
            duplicates: duplicate_names(cards, unknown),
        }
    }

    pub fn totals(&self, cards: &[Card]) -> Totals {
        total_spent(cards)
    }

    // ── Text output ───────────────────────────────────────────────────────

    /// Localized result count, e.g. " --- Showing 3 results. Unique: 2".
    pub fn result_summary(&self, result: &QueryResult) -> String {
        if result.cards.is_empty() {
            return self
                .vocabulary
                .label_or("showingentries", "NUMBER results.")
                .replace("NUMBER", "0");
        }
        self.vocabulary
            .label_or("showingcards", " --- Showing NUMBER results. Unique: UNIQUENUM")
            .replace("NUMBER", &result.cards.len().to_string())
            .replace("UNIQUENUM", &result.unique_names.to_string())
    }

    pub fn total_spent_line(&self, totals: &Totals) -> String {
        format!(
            "Total spent: €{:.2} (€{:.2} for the items, €{:.2} in taxes)",
            totals.total, totals.items, totals.taxes
        )
    }

    pub fn renderer(&self) -> BadgeRenderer<'_> {
        BadgeRenderer::new(&self.vocabulary, self.game)
    }

    /// HTML table rows for `cards` under the session's display settings.
    pub fn render_rows(&self, cards: &[Card], sort: Option<SortKey>) -> String {
        self.renderer()
            .render_rows(cards, &self.config, sort == Some(SortKey::Stonks))
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
