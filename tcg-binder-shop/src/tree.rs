//! Walking category trees by path segments.

use crate::types::{CategoryNode, CategoryTree, DEFAULT_CATEGORY_IMAGE, Product};

/// Where a segment path led.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath<'a> {
    /// The deepest node reached; `None` when even the root segment is unknown.
    pub node: Option<&'a CategoryNode>,
    /// Display names of every node walked, title-cased segments as fallback.
    pub names: Vec<String>,
    /// The segments that resolved, in order.
    pub path_walk: Vec<String>,
}

/// A child category tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Subcategory {
    pub key: String,
    pub name: String,
    pub image: String,
    /// Segment path of the child, `/`-joined.
    pub path: String,
    /// Set when the tile opens an external page instead of the child.
    pub external_url: Option<String>,
}

impl ResolvedPath<'_> {
    /// Names joined with `" / "`, or the title-cased request when nothing resolved.
    pub fn breadcrumb(&self, segments: &[&str]) -> String {
        if self.names.is_empty() {
            title_case(&segments.join(" / "))
        } else {
            self.names.join(" / ")
        }
    }

    /// Whether every requested segment resolved.
    pub fn is_complete(&self, segments: &[&str]) -> bool {
        self.path_walk.len() == segments.len()
    }

    /// Child tiles of the resolved node, in key order.
    pub fn subcategories(&self) -> Vec<Subcategory> {
        let Some(node) = self.node else {
            return Vec::new();
        };
        let base = self.path_walk.join("/");
        node.children
            .iter()
            .map(|(key, child)| Subcategory {
                key: key.clone(),
                name: child.name.clone().unwrap_or_else(|| title_case(key)),
                image: child
                    .image
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CATEGORY_IMAGE.to_string()),
                path: format!("{base}/{key}"),
                external_url: if child.force_external {
                    child.url.clone()
                } else {
                    None
                },
            })
            .collect()
    }

    /// Products embedded in the resolved node.
    pub fn embedded_items(&self) -> Option<&[Product]> {
        self.node.and_then(|n| n.items.as_deref())
    }
}

/// Follow `segments` from the tree's roots through `children`, stopping at the
/// first segment that does not exist.
pub fn resolve<'a>(tree: &'a CategoryTree, segments: &[&str]) -> ResolvedPath<'a> {
    let mut node: Option<&CategoryNode> = None;
    let mut names = Vec::new();
    let mut path_walk = Vec::new();

    for segment in segments {
        let next = match node {
            None => tree.get(*segment),
            Some(current) => current.children.get(*segment),
        };
        let Some(next) = next else {
            log::debug!("Segment \"{}\" not found", segment);
            break;
        };
        names.push(next.name.clone().unwrap_or_else(|| title_case(segment)));
        path_walk.push(segment.to_string());
        node = Some(next);
    }

    ResolvedPath {
        node,
        names,
        path_walk,
    }
}

/// Product with the given id among the items embedded at `segments`.
pub fn find_product<'a>(
    tree: &'a CategoryTree,
    segments: &[&str],
    id: &str,
) -> Option<&'a Product> {
    resolve(tree, segments)
        .node?
        .items
        .as_deref()?
        .iter()
        .find(|p| p.id == id)
}

/// Capitalize the first word character of every word and lowercase the rest.
///
/// Leading punctuation is kept as is: `"(new) items"` becomes `"(New) Items"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_whitespace() {
            in_word = false;
            out.push(c);
        } else if in_word {
            out.extend(c.to_lowercase());
        } else if c.is_alphanumeric() || c == '_' {
            in_word = true;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_words() {
        let cases = [
            ("board games", "Board Games"),
            ("TCG stuff", "Tcg Stuff"),
            ("(new) items", "(New) Items"),
            ("food / snacks", "Food / Snacks"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(title_case(input), expected, "input '{}'", input);
        }
    }
}
