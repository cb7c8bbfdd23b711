//! Collection tags embedded in comments as `[tag]` or `{tag}`.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("valid regex"));

/// Rewrite `{tag}` to `[tag]` so both spellings match the same way.
pub fn normalize_tag_brackets(comments: &str) -> String {
    comments.replace('{', "[").replace('}', "]")
}

/// Tag labels in order of appearance, without brackets.
pub fn collection_tags(comments: &str) -> Vec<String> {
    let normalized = normalize_tag_brackets(comments);
    TAG.captures_iter(&normalized)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Comments with every tag removed, for plain display.
pub fn strip_tags(comments: &str) -> String {
    let without_braces = comments.replace(['{', '}'], "");
    TAG.replace_all(&without_braces, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_bracket_styles_are_tags() {
        assert_eq!(
            collection_tags("Binder 2 [Dragons] {Retro} note"),
            vec!["Dragons", "Retro"]
        );
        assert!(collection_tags("no tags here").is_empty());
    }

    #[test]
    fn strip_tags_keeps_the_rest() {
        assert_eq!(strip_tags("Signed [Dragons] copy"), "Signed  copy");
        assert_eq!(strip_tags("[Only]"), "");
    }
}
