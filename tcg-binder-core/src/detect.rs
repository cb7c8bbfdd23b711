//! Game auto-detection from catalog `Type` values.
//!
//! The detector holds an ordered table of (game, pattern) pairs. Records are
//! scanned in file order; for the first record whose type matches any pattern,
//! the first matching game in table order wins.

use regex::Regex;

use crate::Game;

/// Ordered regex table used to decide which game a catalog belongs to.
pub struct GameDetector {
    table: Vec<(Game, Regex)>,
}

impl Default for GameDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDetector {
    /// Build the standard detector covering every supported game.
    pub fn new() -> Self {
        let table = Game::all()
            .iter()
            .map(|&game| {
                // Patterns are compile-time constants covered by tests.
                let re = Regex::new(game.detector_pattern())
                    .expect("built-in game pattern must compile");
                (game, re)
            })
            .collect();
        Self { table }
    }

    /// Build a detector from a custom ordered table.
    pub fn with_table(table: Vec<(Game, Regex)>) -> Self {
        Self { table }
    }

    /// Test a single type string against the table, in order.
    pub fn detect_type(&self, type_text: &str) -> Option<Game> {
        self.table
            .iter()
            .find(|(_, re)| re.is_match(type_text))
            .map(|(game, _)| *game)
    }

    /// Detect the game of a catalog from its type values in file order.
    ///
    /// Returns `None` (unknown) when no record matches any pattern.
    pub fn detect<'a, I>(&self, types: I) -> Option<Game>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for type_text in types {
            if let Some(game) = self.detect_type(type_text) {
                log::debug!("Detected game {} from type \"{}\"", game, type_text);
                return Some(game);
            }
        }
        log::info!("Could not identify the current game.");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        let detector = GameDetector::new();
        assert_eq!(detector.table.len(), Game::all().len());
    }

    #[test]
    fn detects_each_game_from_a_typical_type() {
        let detector = GameDetector::new();
        let cases = [
            ("Monster (Effect/XYZ)", Game::YuGiOh),
            ("Spell (Quick-Play)", Game::YuGiOh),
            ("Pokémon (Stage 1/Fire)", Game::Pokemon),
            ("Grade 3 (Royal Paladin)", Game::Vanguard),
            ("Tamer (Red)", Game::Digimon),
            ("Creature (Green)", Game::Mtg),
            ("Leader (Red/Straw Hat Crew)", Game::OnePiece),
            ("Battle (Saiyan)", Game::DragonBallSuper),
        ];
        for (input, expected) in cases {
            assert_eq!(
                detector.detect_type(input),
                Some(expected),
                "type '{}' should detect as {:?}",
                input,
                expected
            );
        }
    }

    #[test]
    fn first_matching_record_wins() {
        let detector = GameDetector::new();
        let types = ["Sleeves", "", "Spell (Normal)", "Pokémon (Base)"];
        assert_eq!(detector.detect(types), Some(Game::YuGiOh));
    }

    #[test]
    fn table_order_breaks_ties_within_a_record() {
        let detector = GameDetector::new();
        // "Token" matches Digimon, "Trap" matches Yu-Gi-Oh: Yu-Gi-Oh comes first.
        assert_eq!(detector.detect_type("Trap Token"), Some(Game::YuGiOh));
    }

    #[test]
    fn no_match_is_unknown() {
        let detector = GameDetector::new();
        assert_eq!(detector.detect(["Sleeves", "Playmat"]), None);
    }

    #[test]
    fn detection_ignores_trailing_rows() {
        let detector = GameDetector::new();
        let short = ["Monster (Effect)"];
        let long = ["Monster (Effect)", "Pokémon (Base)", "Creature (Red)"];
        assert_eq!(detector.detect(short), detector.detect(long));
    }
}
