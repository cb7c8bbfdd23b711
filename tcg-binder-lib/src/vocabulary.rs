//! Display strings for the active language.
//!
//! A [`Vocabulary`] starts from the base table below and, once a game is
//! detected, has that game's terms layered on top. Game terms win over base
//! terms with the same key.

use std::collections::HashMap;

use tcg_binder_core::{Game, Language, Term};

const BASE_TERMS: &[Term] = &[
    ("collectionheader", "My Card Collection", "La mia collezione di carte"),
    ("filterNamePlaceholder", "Card Name", "Nome della Carta"),
    ("allTypes", "All Types", "Tutti i Tipi"),
    ("token", "Token", "Token"),
    ("number", "Number", "Numero"),
    // ── Rarities ──────────────────────────────────────────────────────────
    ("rarityAll", "All Rarities", "Tutte le Rarità"),
    ("common", "Common", "Comune"),
    ("rare", "Rare", "Rara"),
    ("fake", "FAKE", "FALSA"),
    // ── Conditions ────────────────────────────────────────────────────────
    ("qualityAll", "All Conditions", "Tutte le Condizioni"),
    ("mint", "Mint", "Mint"),
    ("nearmint", "Near Mint", "Near Mint"),
    ("slightlyplayed", "Slightly Played", "Slightly Played"),
    ("moderatelyplayed", "Moderately Played", "Moderately Played"),
    ("played", "Played", "Played"),
    ("poor", "Poor", "Poor"),
    ("unknowngood", "Unknown (good)", "Boh (buona)"),
    ("unknownbad", "Unknown (bad)", "Boh (scarsa)"),
    // ── Languages ─────────────────────────────────────────────────────────
    ("languageAll", "All Languages", "Tutte le Lingue"),
    ("IT", "IT", "IT"),
    ("EN", "EN", "EN"),
    ("JP", "JP", "JP"),
    ("DE", "DE", "DE"),
    ("ES", "ES", "ES"),
    ("FR", "FR", "FR"),
    // ── Editions ──────────────────────────────────────────────────────────
    ("editionAll", "All Editions", "Tutte le Edizioni"),
    ("firstedition", "First Edition", "Prima Edizione"),
    ("first", "First", "Prima"),
    ("limitededition", "Limited Edition", "Edizione Limitata"),
    ("limited", "Limited", "Limitata"),
    ("standardedition", "Standard Edition", "Edizione Standard"),
    ("standard", "Standard", "Standard"),
    // ── Sorting ───────────────────────────────────────────────────────────
    ("sortNone", "No Sorting", "Nessun Ordinamento"),
    ("sortName", "Sort by Name", "Ordina per Nome"),
    ("sortType", "Sort by Type", "Ordina per Tipo"),
    ("sortRarity", "Sort by Rarity", "Ordina per Rarità"),
    ("sortCondition", "Sort by Condition", "Ordina per Stato"),
    ("sortLanguage", "Sort by Language", "Ordina per Lingua"),
    ("sortEdition", "Sort by Edition", "Ordina per Edizione"),
    ("sortPricePaid", "Sort by Money Spent", "Ordina per Prezzo"),
    ("sortMarketPrice", "Sort by Market Price", "Ordina per Prezzo di Mercato"),
    ("sortPackId", "Sort by PackID", "Ordina per ID Pacchetto"),
    ("sortDateObtained", "Sort by Acquirement Date", "Ordina per Data di Acquisizione"),
    ("sortLocation", "Sort by Location", "Ordina per Posizione"),
    ("sortComments", "Sort by Comments", "Ordina per Commenti"),
    ("applyFilters", "Apply Filters", "Applica Filtri"),
    ("reverseOrder", "Reverse Table", "Inverti Tabella"),
    ("showDebug", "Show Debug", "Mostra Debug"),
    // ── Table headers ─────────────────────────────────────────────────────
    ("tableImage", "IMG", "IMG"),
    ("tableName", "Name", "Nome"),
    ("tableType", "Type", "Tipo"),
    ("tableRarity", "Rarity", "Rarità"),
    ("tableQuality", "Condition", "Stato"),
    ("tableLanguage", "Lang.", "Lingua"),
    ("tableEdition", "Edit.", "Ediz."),
    ("tableSpent", "Spent", "Spesi"),
    ("tableMarket", "Market", "Mercato"),
    ("tableId", "ID", "ID"),
    ("tableObtained", "Obt.", "Otten."),
    ("tableLocation", "Loc.", "Posiz."),
    ("tableComments", "Comments", "Commenti"),
    ("tableWiki", "Wiki", "Wiki"),
    // ── Messages ──────────────────────────────────────────────────────────
    ("unknown", "Unknown", "Boh"),
    (
        "nothingfound",
        "Nothing found. Check CSV or filter conditions!",
        "Nessun risultato. Ricontrolla il CSV o i filtri!",
    ),
    ("showingentries", "NUMBER results.", "NUMBER risultati."),
    (
        "showingcards",
        " --- Showing NUMBER results. Unique: UNIQUENUM",
        " --- NUMBER risultati. Unici: UNIQUENUM",
    ),
    (
        "csverror",
        "Error loading CSV file. Please check your CSV file.",
        "Errore nel caricamento del CSV. Ricontrollalo",
    ),
    ("go", "Go", "Vai"),
    ("pageLanguage", "Display Language: ", "Lingua Pagina: "),
    ("loadcsv", "Load CSV", "Carica CSV"),
    ("totalSpent", "Total spent: ", "Totale: "),
    // ── Products ──────────────────────────────────────────────────────────
    ("product", "Product", "Prodotto"),
    ("sleeves", "Sleeves", "Sleeves"),
    ("structuredeck", "Structure Deck", "Structure Deck"),
    ("storage", "Storage", "Storage"),
    ("fieldcentercard", "Field Center Card", "Field Center Card"),
    ("empty", "Empty", "Vuoto/a"),
    ("album", "Album", "Album"),
    ("none", "", ""),
];

/// Merged base and game terms, read in one language at a time.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    language: Language,
    game: Option<Game>,
    terms: HashMap<&'static str, Term>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Vocabulary {
    /// Base terms only.
    pub fn new(language: Language) -> Self {
        let mut vocabulary = Self {
            language,
            game: None,
            terms: HashMap::new(),
        };
        vocabulary.reset(None);
        vocabulary
    }

    pub fn for_game(game: Option<Game>, language: Language) -> Self {
        let mut vocabulary = Self::new(language);
        vocabulary.reset(game);
        vocabulary
    }

    /// Drop every game term and re-seed for `game`.
    pub fn reset(&mut self, game: Option<Game>) {
        self.terms.clear();
        self.insert_all(BASE_TERMS);
        if let Some(game) = game {
            self.insert_all(game.vocabulary());
        }
        self.game = game;
    }

    fn insert_all(&mut self, terms: &'static [Term]) {
        for term in terms {
            self.terms.insert(term.0, *term);
        }
    }

    pub fn game(&self) -> Option<Game> {
        self.game
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// The term for `key` in the active language. An empty Italian entry
    /// falls back to English; an unknown key gives `None`.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        let (_, en, it) = self.terms.get(key)?;
        match self.language {
            Language::Italian if !it.is_empty() => Some(it),
            _ => Some(en),
        }
    }

    /// The term for `key`, or `raw` when the key is unknown or blank.
    pub fn label_or<'a>(&self, key: &str, raw: &'a str) -> &'a str {
        match self.get(key) {
            Some(text) if !text.is_empty() => text,
            _ => raw,
        }
    }

    /// Word used by "Number NN" card names in this language.
    pub fn number_word(&self) -> &'static str {
        self.get("number").unwrap_or("Number")
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/vocabulary_tests.rs"]
mod tests;
