//! Parser for card type strings.
//!
//! A type is free text with an optional parenthesized list of sub-type
//! tokens separated by `/`:
//! ```text
//! Monster (Effect/XYZ)
//! ```
//! Only the first parenthesized group counts; it is removed from the base.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("valid regex"));

/// A type string split into its base text and sub-type tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedType {
    /// Type with the first `( ... )` group removed, trimmed.
    pub base: String,
    /// Trimmed tokens from the first `( ... )` group, in order.
    pub tokens: Vec<String>,
    /// Whether a `( ... )` group was present at all.
    pub has_group: bool,
}

impl ParsedType {
    /// Parse a type string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tcg_binder_catalog::ParsedType;
    ///
    /// let parsed = ParsedType::parse("Monster (Effect/XYZ)");
    /// assert_eq!(parsed.base, "Monster");
    /// assert_eq!(parsed.tokens, vec!["Effect", "XYZ"]);
    /// ```
    pub fn parse(type_text: &str) -> Self {
        match TOKEN_GROUP.captures(type_text) {
            Some(caps) => {
                let group = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
                let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                let mut base = String::with_capacity(type_text.len());
                base.push_str(&type_text[..group.start]);
                base.push_str(&type_text[group.end..]);
                Self {
                    base: base.trim().to_string(),
                    tokens: inner.split('/').map(|t| t.trim().to_string()).collect(),
                    has_group: true,
                }
            }
            None => Self {
                base: type_text.trim().to_string(),
                tokens: Vec::new(),
                has_group: false,
            },
        }
    }

    /// Lower-cased base, for case-insensitive matching.
    pub fn base_lower(&self) -> String {
        self.base.to_lowercase()
    }

    /// Lower-cased tokens, for case-insensitive matching.
    pub fn tokens_lower(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_type_has_no_tokens() {
        let parsed = ParsedType::parse("  Spell ");
        assert_eq!(parsed.base, "Spell");
        assert!(parsed.tokens.is_empty());
        assert!(!parsed.has_group);
    }

    #[test]
    fn group_in_the_middle_is_removed() {
        let parsed = ParsedType::parse("Pokémon (Stage 1 / Fire) ex");
        assert_eq!(parsed.base, "Pokémon  ex");
        assert_eq!(parsed.tokens, vec!["Stage 1", "Fire"]);
    }

    #[test]
    fn only_first_group_counts() {
        let parsed = ParsedType::parse("Unit (Grade 3) (Royal Paladin)");
        assert_eq!(parsed.base, "Unit  (Royal Paladin)");
        assert_eq!(parsed.tokens, vec!["Grade 3"]);
    }

    #[test]
    fn empty_group_is_not_a_group() {
        let parsed = ParsedType::parse("Trap ()");
        assert_eq!(parsed.base, "Trap ()");
        assert!(!parsed.has_group);
    }

    #[test]
    fn lower_views() {
        let parsed = ParsedType::parse("Monster (Effect/XYZ)");
        assert_eq!(parsed.base_lower(), "monster");
        assert_eq!(parsed.tokens_lower(), vec!["effect", "xyz"]);
    }
}
