//! Per-game rarity priority tables.
//!
//! Each table lists alias groups from highest prestige to lowest. A rarity's
//! rank is the index of the group containing it; lookups ignore case,
//! whitespace and quote characters so "Collector's Rare" and "collectorsrare"
//! land on the same rank.

use crate::Game;

/// An ordered rarity ranking for one game.
#[derive(Debug, Clone, Copy)]
pub struct RarityOrder {
    groups: &'static [&'static [&'static str]],
}

impl RarityOrder {
    /// An empty ranking: every rarity is unmapped.
    pub const fn empty() -> Self {
        Self { groups: &[] }
    }

    /// Number of ranked groups. Unmapped rarities sort at this index.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Rank of a rarity, `None` when the table does not know it.
    pub fn rank(&self, rarity: &str) -> Option<usize> {
        let key = rarity_key(rarity);
        self.groups
            .iter()
            .position(|group| group.iter().any(|alias| rarity_key(alias) == key))
    }

    /// Rank of a rarity with unmapped values sorted last.
    pub fn rank_or_last(&self, rarity: &str) -> usize {
        self.rank(rarity).unwrap_or(self.len())
    }

    /// The first (display) alias of every group, in rank order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups.iter().filter_map(|group| group.first().copied())
    }
}

/// Normalize a rarity for table lookup: lowercase, no quotes, no whitespace.
pub fn rarity_key(rarity: &str) -> String {
    rarity
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}' | '"') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Game {
    /// The game's rarity ranking, highest prestige first.
    pub fn rarity_order(&self) -> RarityOrder {
        let groups: &'static [&'static [&'static str]] = match self {
            Self::YuGiOh => &[
                &["Starlight Rare", "starlight"],
                &["Ghost Rare"],
                &[
                    "Quarter Century Secret Rare",
                    "Quarter-Century Secret Rare",
                    "qcsr",
                ],
                &["Collectors Rare"],
                &["Ultimate Rare"],
                &["Secret Rare"],
                &["Ultra Rare"],
                &["Super Rare"],
                &["Rare"],
                &["Common"],
                &["Unknown"],
                &["None"],
                &["Fake"],
            ],
            Self::Pokemon => &[
                &["Secret Rare"],
                &["Ultra Rare"],
                &["Holo Rare"],
                &["Rare"],
                &["Uncommon"],
                &["Common"],
                &["Unknown"],
                &["None"],
                &["Fake"],
            ],
            Self::Vanguard => &[
                &["Secret Rare", "sec"],
                &["Zeroth Rare", "zr"],
                &["Wedding SP", "wsp"],
                &["Image Rare", "imr"],
                &["Origin Rare", "or"],
                &["Special Vanguard Rare", "svr"],
                &["Vanguard Rare", "vr"],
                &["Special Generation Rare", "sgr"],
                &["Generation Rare", "gr"],
                &["Premium Rare", "pr"],
                &["Triple Rare", "rrr"],
                &["Double Rare", "rr"],
                &["Rare", "r"],
                &["Common", "c"],
                &["Reprint", "re"],
                &["Promo"],
                &["Unknown"],
                &["None"],
                &["Fake"],
            ],
            Self::Digimon => &[
                &["Secret Rare"],
                &["Super Rare"],
                &["Rare"],
                &["Uncommon"],
                &["Common"],
                &["Promo"],
                &["Parallel Art"],
                &["Unknown"],
            ],
            Self::Mtg => &[
                &["Mythic Rare"],
                &["Rare"],
                &["Uncommon"],
                &["Common"],
                &["Promo"],
                &["Masterpiece"],
                &["Special"],
                &["Timeshifted"],
                &["Bonus"],
                &["Token"],
                &["Unknown"],
            ],
            Self::OnePiece => &[
                &["Secret Rare", "sec"],
                &["Special", "sp", "manga"],
                &["Parallel", "alt art"],
                &["Leader", "l"],
                &["Super Rare", "sr"],
                &["Rare", "r"],
                &["Uncommon", "uc"],
                &["Common", "c"],
                &["Promo", "p"],
                &["DON!!", "don"],
                &["Unknown"],
            ],
            Self::DragonBallSuper => &[
                &["Secret Rare", "scr"],
                &["Special Rare", "spr"],
                &["Super Rare", "sr"],
                &["Rare", "r"],
                &["Uncommon", "uc"],
                &["Common", "c"],
                &["Promo"],
                &["PR"],
                &["Unknown"],
            ],
        };
        RarityOrder { groups }
    }
}
