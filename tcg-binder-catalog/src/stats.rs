//! Collection statistics: packs, locations and duplicated names.

use std::collections::HashMap;

use tcg_binder_core::text::locale_cmp;

use crate::card::Card;

const UNKNOWN_PACK: &str = "unknown";

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq)]
pub struct CountRow {
    pub label: String,
    pub count: usize,
    /// Share of all cards in the catalog, 0 to 100.
    pub percentage: f64,
}

/// The pack a card belongs to: the pack id, or the card id when the pack id
/// is empty or "unknown", cut at the first `#`. `None` when neither helps.
pub fn resolved_pack_id(card: &Card) -> Option<String> {
    let pack = card.pack_id.trim();
    let source = if !pack.is_empty() && !pack.eq_ignore_ascii_case(UNKNOWN_PACK) {
        pack
    } else {
        card.id.trim()
    };
    let resolved = source.split('#').next().unwrap_or("").trim();
    if resolved.is_empty() || resolved == UNKNOWN_PACK {
        None
    } else {
        Some(resolved.to_string())
    }
}

/// Cards per pack, most common first.
pub fn pack_stats(cards: &[Card]) -> Vec<CountRow> {
    tally(cards.iter().filter_map(resolved_pack_id), cards.len())
}

/// Cards per location, most common first. Empty locations count under
/// `unknown_label`.
pub fn location_stats(cards: &[Card], unknown_label: &str) -> Vec<CountRow> {
    let labels = cards.iter().map(|card| {
        if card.location.trim().is_empty() {
            unknown_label.to_string()
        } else {
            card.location.clone()
        }
    });
    tally(labels, cards.len())
}

/// Names that appear more than once, with their counts, in first-seen order.
/// Angle brackets are dropped from names before counting.
pub fn duplicate_names(cards: &[Card], unknown_label: &str) -> Vec<(String, usize)> {
    let labels = cards.iter().map(|card| {
        let name = card.name.replace(['<', '>'], "");
        if name.is_empty() {
            unknown_label.to_string()
        } else {
            name
        }
    });
    count_in_order(labels, cards.len())
        .into_iter()
        .filter(|row| row.count > 1)
        .map(|row| (row.label, row.count))
        .collect()
}

/// Distinct resolved pack ids in alphabetical order.
pub fn pack_options(cards: &[Card]) -> Vec<String> {
    let mut packs: Vec<String> = cards.iter().filter_map(resolved_pack_id).collect();
    packs.sort_by(|a, b| locale_cmp(a, b));
    packs.dedup();
    packs
}

/// Count labels, most common first; equal counts keep first-seen order.
fn tally<I>(labels: I, total: usize) -> Vec<CountRow>
where
    I: IntoIterator<Item = String>,
{
    let mut rows = count_in_order(labels, total);
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

fn count_in_order<I>(labels: I, total: usize) -> Vec<CountRow>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<CountRow> = Vec::new();
    for label in labels {
        match index.get(&label) {
            Some(&i) => rows[i].count += 1,
            None => {
                index.insert(label.clone(), rows.len());
                rows.push(CountRow {
                    label,
                    count: 1,
                    percentage: 0.0,
                });
            }
        }
    }
    for row in &mut rows {
        row.percentage = if total == 0 {
            0.0
        } else {
            row.count as f64 / total as f64 * 100.0
        };
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_with(id: &str, pack_id: &str) -> Card {
        let mut card = Card::new("X", "Monster");
        card.id = id.to_string();
        card.pack_id = pack_id.to_string();
        card
    }

    #[test]
    fn pack_id_resolution() {
        let cases = [
            ("LOB-001", "LOB#3", Some("LOB")),
            ("LOB-001", "", Some("LOB-001")),
            ("MRD-010#2", "Unknown", Some("MRD-010")),
            ("", "", None),
            ("unknown", "", None),
        ];
        for (id, pack, expected) in cases {
            assert_eq!(
                resolved_pack_id(&card_with(id, pack)).as_deref(),
                expected,
                "id '{}', pack '{}'",
                id,
                pack
            );
        }
    }

    #[test]
    fn tally_sorts_by_count_and_keeps_ties_in_order() {
        let rows = tally(
            ["b", "a", "b", "c", "a", "b"].map(String::from),
            6,
        );
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
        assert_eq!(rows[0].percentage, 50.0);
    }
}
