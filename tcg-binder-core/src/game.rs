/// Trading-card game identifiers for every supported catalog.
///
/// This enum centralizes game identity (short names, display names, aliases)
/// together with the per-game data tables that drive rarity ordering, type
/// badges, filter dropdowns and vocabulary. Each table lives in its own module
/// and is reached through a method here, so callers never switch on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    YuGiOh,
    Pokemon,
    Vanguard,
    Digimon,
    Mtg,
    OnePiece,
    DragonBallSuper,
}

/// All game variants in detection order.
const ALL_GAMES: &[Game] = &[
    Game::YuGiOh,
    Game::Pokemon,
    Game::Vanguard,
    Game::Digimon,
    Game::Mtg,
    Game::OnePiece,
    Game::DragonBallSuper,
];

impl Game {
    /// Canonical short name used for CLI arguments and image folders.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::YuGiOh => "yugioh",
            Self::Pokemon => "pokemon",
            Self::Vanguard => "vanguard",
            Self::Digimon => "digimon",
            Self::Mtg => "mtg",
            Self::OnePiece => "onepiece",
            Self::DragonBallSuper => "dbs",
        }
    }

    /// Full display name for the game.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::YuGiOh => "Yu-Gi-Oh",
            Self::Pokemon => "Pokémon",
            Self::Vanguard => "Vanguard",
            Self::Digimon => "Digimon",
            Self::Mtg => "Magic: The Gathering",
            Self::OnePiece => "One Piece",
            Self::DragonBallSuper => "Dragon Ball Super",
        }
    }

    /// All accepted names for this game (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::YuGiOh => &["yugioh", "yu-gi-oh", "ygo", "yu-gi-oh!"],
            Self::Pokemon => &["pokemon", "pokémon", "pkm", "ptcg"],
            Self::Vanguard => &["vanguard", "cfv", "cardfight vanguard"],
            Self::Digimon => &["digimon", "dtcg"],
            Self::Mtg => &["mtg", "magic", "magic: the gathering"],
            Self::OnePiece => &["onepiece", "one piece", "optcg"],
            Self::DragonBallSuper => &["dbs", "dragon ball super", "dragonball"],
        }
    }

    /// Case-insensitive regex matched against a record's `Type` field.
    pub fn detector_pattern(&self) -> &'static str {
        match self {
            Self::YuGiOh => r"(?i)\b(Monster|Spell|Trap)\b",
            Self::Pokemon => r"(?i)\b(Pokémon|Pokemon|Base|Stage|GX|V|EX|Trainer|Energy)\b",
            Self::Vanguard => {
                r"(?i)\b(Grade\s?[0-4]|Unit|Trigger|G-Unit|G-Guardian|Stride|Order|Guard(ian)?|Imaginary Gift|Overdress|Persona Ride)\b"
            }
            Self::Digimon => r"(?i)\b(Digimon|Digi[- ]Egg|Tamer|Option|Token)\b",
            Self::Mtg => {
                r"(?i)\b(Creature|Instant|Sorcery|Enchantment|Artifact|Planeswalker|Land)\b"
            }
            Self::OnePiece => r"(?i)\b(Leader|Character|Event|DON)\b",
            Self::DragonBallSuper => r"(?i)\b(Battle|Extra|Unison|Z-Extra)\b",
        }
    }

    /// All 7 game variants, in detection order.
    pub fn all() -> &'static [Game] {
        ALL_GAMES
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Game`.
#[derive(Debug, Clone)]
pub struct GameParseError(pub String);

impl std::fmt::Display for GameParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown game: '{}'", self.0)
    }
}

impl std::error::Error for GameParseError {}

impl std::str::FromStr for Game {
    type Err = GameParseError;

    /// Parse a game from its short name, display name, or any alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &game in ALL_GAMES {
            if game.short_name() == lower || game.display_name().to_lowercase() == lower {
                return Ok(game);
            }
            if game.aliases().contains(&lower.as_str()) {
                return Ok(game);
            }
        }
        Err(GameParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_7_variants() {
        assert_eq!(Game::all().len(), 7);
    }

    #[test]
    fn canonical_names_round_trip() {
        for &game in Game::all() {
            let parsed: Game = game.short_name().parse().unwrap();
            assert_eq!(parsed, game, "round-trip failed for {:?}", game);
        }
    }

    #[test]
    fn display_names_parse() {
        for &game in Game::all() {
            let parsed: Game = game.display_name().parse().unwrap();
            assert_eq!(parsed, game, "display name failed for {:?}", game);
        }
    }

    #[test]
    fn short_name_is_first_alias() {
        for &game in Game::all() {
            assert_eq!(
                game.short_name(),
                game.aliases()[0],
                "short_name should be first alias for {:?}",
                game,
            );
        }
    }

    #[test]
    fn aliases_resolve_case_insensitively() {
        let cases = [
            ("YGO", Game::YuGiOh),
            ("Pokémon", Game::Pokemon),
            ("Magic", Game::Mtg),
            ("One Piece", Game::OnePiece),
            ("DBS", Game::DragonBallSuper),
        ];
        for (input, expected) in cases {
            let parsed: Game = input.parse().unwrap();
            assert_eq!(parsed, expected, "alias '{}' should parse", input);
        }
    }

    #[test]
    fn unknown_string_returns_err() {
        let result: Result<Game, _> = "hearthstone".parse();
        assert!(result.is_err());
    }
}
