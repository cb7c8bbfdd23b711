//! Sort engine: a closed set of sort keys, each with its own comparator.
//!
//! Every sort is stable. Numeric fields are read from the values each card
//! computed at construction, so comparators never re-parse prices.

use std::cmp::Ordering;

use chrono::NaiveDate;
use tcg_binder_core::text::{fold, locale_cmp, natural_cmp, normalize_card_name, strip_html};
use tcg_binder_core::{Game, RarityOrder, rarity_key};

use crate::card::Card;

/// Condition ranking; the empty string ranks first.
const QUALITY_ORDER: &[&str] = &[
    "",
    "Mint",
    "Near Mint",
    "Slightly Played",
    "Moderately Played",
    "Played",
    "Poor",
    "Unknown (good)",
    "Unknown (bad)",
    "Fake",
    "None",
];

const EDITION_ORDER: &[&str] = &[
    "Limited Edition",
    "First Edition",
    "Standard Edition",
    "Unknown",
    "None",
    "Fake",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Type,
    Rarity,
    Condition,
    Edition,
    PricePaid,
    MarketPrice,
    DateObtained,
    Stonks,
    Id,
    Location,
    Language,
    Comments,
}

const ALL_SORT_KEYS: &[SortKey] = &[
    SortKey::Name,
    SortKey::Type,
    SortKey::Rarity,
    SortKey::Condition,
    SortKey::Edition,
    SortKey::PricePaid,
    SortKey::MarketPrice,
    SortKey::DateObtained,
    SortKey::Stonks,
    SortKey::Id,
    SortKey::Location,
    SortKey::Language,
    SortKey::Comments,
];

impl SortKey {
    /// Parse a sort key name, case-insensitively. Unknown names give `None`,
    /// which [`sort_cards`] treats as "keep the current order".
    pub fn parse(s: &str) -> Option<Self> {
        let key = match s.trim().to_lowercase().as_str() {
            "name" => Self::Name,
            "type" => Self::Type,
            "rarity" => Self::Rarity,
            "condition" | "quality" => Self::Condition,
            "edition" => Self::Edition,
            "pricepaid" | "price" => Self::PricePaid,
            "marketprice" | "market" => Self::MarketPrice,
            "dateobtained" | "date" => Self::DateObtained,
            "stonks" | "profit" => Self::Stonks,
            "id" => Self::Id,
            "location" => Self::Location,
            "language" => Self::Language,
            "comments" => Self::Comments,
            _ => return None,
        };
        Some(key)
    }

    /// Canonical key name, as accepted by [`SortKey::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Rarity => "rarity",
            Self::Condition => "condition",
            Self::Edition => "edition",
            Self::PricePaid => "pricePaid",
            Self::MarketPrice => "marketPrice",
            Self::DateObtained => "dateObtained",
            Self::Stonks => "stonks",
            Self::Id => "Id",
            Self::Location => "location",
            Self::Language => "language",
            Self::Comments => "comments",
        }
    }

    pub fn all() -> &'static [SortKey] {
        ALL_SORT_KEYS
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session state the comparators depend on.
#[derive(Debug, Clone)]
pub struct SortContext {
    /// Detected game; `None` leaves rarity sorting without a table.
    pub game: Option<Game>,
    /// Localized word substituted for `Number C`-style name prefixes.
    pub number_word: String,
}

impl Default for SortContext {
    fn default() -> Self {
        Self {
            game: None,
            number_word: "Number".to_string(),
        }
    }
}

/// Stable sort of `cards` by `key`. `None` leaves the order untouched.
pub fn sort_cards(cards: &mut [Card], key: Option<SortKey>, ctx: &SortContext) {
    let Some(key) = key else {
        return;
    };
    match key {
        SortKey::Name => sort_baseline(cards, &ctx.number_word),
        SortKey::Type => cards.sort_by_cached_key(|c| locale_key(strip_html(&c.card_type))),
        SortKey::Rarity => sort_by_rarity(cards, ctx.game),
        SortKey::Condition => cards.sort_by_key(|c| rank_in(QUALITY_ORDER, &c.quality)),
        SortKey::Edition => cards.sort_by_key(|c| rank_in(EDITION_ORDER, &c.edition)),
        SortKey::PricePaid => cards.sort_by(|a, b| b.price_paid().total_cmp(&a.price_paid())),
        SortKey::MarketPrice => {
            cards.sort_by(|a, b| a.market_value().total_cmp(&b.market_value()))
        }
        SortKey::DateObtained => cards.sort_by_cached_key(|c| parse_date(&c.date_obtained)),
        SortKey::Stonks => cards.sort_by(compare_stonks),
        SortKey::Id => cards.sort_by(|a, b| compare_ids(&a.id, &b.id)),
        SortKey::Location => cards.sort_by(|a, b| locale_cmp(&a.location, &b.location)),
        SortKey::Language => cards.sort_by(|a, b| locale_cmp(&a.language, &b.language)),
        SortKey::Comments => cards.sort_by(compare_comments),
    }
}

/// The order a freshly loaded catalog is kept in: natural order of names
/// with numbered-card prefixes normalized.
pub fn sort_baseline(cards: &mut [Card], number_word: &str) {
    cards.sort_by_cached_key(|c| {
        NaturalKey(normalize_card_name(&c.name, number_word).trim().to_string())
    });
}

/// Reverse the current order in place.
pub fn reverse(cards: &mut [Card]) {
    cards.reverse();
}

/// A string ordered by [`natural_cmp`].
struct NaturalKey(String);

impl PartialEq for NaturalKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NaturalKey {}

impl PartialOrd for NaturalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NaturalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(&self.0, &other.0)
    }
}

/// Cached key that orders the same way as [`locale_cmp`].
fn locale_key(s: String) -> (String, String) {
    (fold(&s), s)
}

fn rank_in(table: &[&str], value: &str) -> usize {
    table
        .iter()
        .position(|entry| *entry == value)
        .unwrap_or(table.len())
}

fn sort_by_rarity(cards: &mut [Card], game: Option<Game>) {
    let order = game.map(|g| g.rarity_order()).unwrap_or(RarityOrder::empty());
    cards.sort_by_cached_key(|c| RarityKey {
        rank: order.rank_or_last(&c.rarity),
        name: rarity_key(&c.name),
        price: c.price_paid(),
    });
}

/// Rarity rank, then normalized name, then price paid descending.
struct RarityKey {
    rank: usize,
    name: String,
    price: f64,
}

impl PartialEq for RarityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RarityKey {}

impl PartialOrd for RarityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RarityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| locale_cmp(&self.name, &other.name))
            .then_with(|| other.price.total_cmp(&self.price))
    }
}

/// Cards with a paid price come first, most profitable first; the rest keep
/// their relative order after them.
fn compare_stonks(a: &Card, b: &Card) -> Ordering {
    let a_paid = a.price_paid() > 0.0;
    let b_paid = b.price_paid() > 0.0;
    match (a_paid, b_paid) {
        (true, true) => b.profit().total_cmp(&a.profit()),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

fn compare_comments(a: &Card, b: &Card) -> Ordering {
    let a_has = !a.comments.trim().is_empty();
    let b_has = !b.comments.trim().is_empty();
    match (a_has, b_has) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => locale_cmp(&a.comments, &b.comments),
        (false, false) => Ordering::Equal,
    }
}

/// Compare set codes like `LOB-005`: prefix first, then the part after the
/// first dash. Empty suffixes come first, numeric ones next in numeric order,
/// and text suffixes last.
fn compare_ids(a: &str, b: &str) -> Ordering {
    let (pre_a, suf_a) = split_id(a);
    let (pre_b, suf_b) = split_id(b);
    locale_cmp(pre_a, pre_b).then_with(|| compare_suffixes(suf_a, suf_b))
}

fn compare_suffixes(a: &str, b: &str) -> Ordering {
    let class = |s: &str, n: Option<i64>| match (s.trim().is_empty(), n) {
        (true, _) => 0,
        (false, Some(_)) => 1,
        (false, None) => 2,
    };
    let (num_a, num_b) = (leading_int(a), leading_int(b));
    class(a, num_a)
        .cmp(&class(b, num_b))
        .then_with(|| num_a.cmp(&num_b))
        .then_with(|| locale_cmp(a, b))
}

fn split_id(id: &str) -> (&str, &str) {
    let mut parts = id.split('-');
    let prefix = parts.next().unwrap_or("");
    let suffix = parts.next().unwrap_or("");
    (prefix, suffix)
}

/// Leading decimal integer with optional sign, ignoring leading whitespace.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Parse `dd/mm/yyyy`; anything else is the epoch.
pub fn parse_date(s: &str) -> NaiveDate {
    let epoch = NaiveDate::default();
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 {
        return epoch;
    }
    let day = parts[0].trim().parse::<u32>();
    let month = parts[1].trim().parse::<u32>();
    let year = parts[2].trim().parse::<i32>();
    match (day, month, year) {
        (Ok(d), Ok(m), Ok(y)) => NaiveDate::from_ymd_opt(y, m, d).unwrap_or(epoch),
        _ => epoch,
    }
}
