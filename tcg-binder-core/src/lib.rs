pub mod badge_rules;
pub mod detect;
pub mod game;
pub mod language;
pub mod options;
pub mod rarity;
pub mod text;
pub mod vocabulary;

pub use badge_rules::{BadgeRule, SHARED_BADGE_RULES, find_badge_rule};
pub use detect::GameDetector;
pub use game::{Game, GameParseError};
pub use language::{Language, LanguageParseError};
pub use options::FilterOption;
pub use rarity::{RarityOrder, rarity_key};
pub use vocabulary::Term;
