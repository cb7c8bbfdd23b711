//! JSON data model for shop and wishlist directories.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Default artwork for categories without an image.
pub const DEFAULT_CATEGORY_IMAGE: &str = "/images/default.png";

// ── Index ───────────────────────────────────────────────────────────────────

/// One entry of `categories.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub url: Option<String>,
}

impl CategoryEntry {
    /// Where the category tile points: its own URL, or the items page.
    pub fn link(&self, key: &str) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| format!("items.html?category={key}"))
    }
}

/// `categories.json`: top-level category key to its entry.
pub type CategoryIndex = BTreeMap<String, CategoryEntry>;

// ── Tree ────────────────────────────────────────────────────────────────────

/// A category in a nested tree file.
///
/// Children are keyed by their path segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::strict_true")]
    pub force_external: bool,
    #[serde(default)]
    pub children: BTreeMap<String, CategoryNode>,
    /// Products embedded in the tree; `None` when the node has no item array.
    #[serde(default, deserialize_with = "lenient::product_list")]
    pub items: Option<Vec<Product>>,
}

/// A tree file: root segment to its node.
pub type CategoryTree = BTreeMap<String, CategoryNode>;

// ── Product ─────────────────────────────────────────────────────────────────

/// A shop or wishlist product.
///
/// Prices may be written as numbers or numeric strings; unreadable values
/// are 0. Ids may be strings or numbers and are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    /// Shop sale price; 0 means "not on sale".
    #[serde(default, deserialize_with = "lenient::number")]
    pub sale_price: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub shipping: f64,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub shipping_optional: bool,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::strict_true")]
    pub force_external: bool,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub paypal_tax: bool,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub info: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub conditions: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub variable_price: bool,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub no_donate_button: bool,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub specific_instructions: Option<String>,
}

impl Product {
    /// External page to open instead of the product page, when forced.
    pub fn external_url(&self) -> Option<&str> {
        if self.force_external {
            self.url.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_fields_are_lenient() {
        let json = r#"{
            "id": 42,
            "name": "Booster Box",
            "price": "89.90",
            "shipping": 7,
            "sale_price": "nope",
            "shipping_optional": "yes",
            "paypal_tax": 0,
            "force_external": "true",
            "info": ""
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "42");
        assert_eq!(p.price, 89.9);
        assert_eq!(p.shipping, 7.0);
        assert_eq!(p.sale_price, 0.0);
        assert!(p.shipping_optional);
        assert!(!p.paypal_tax);
        assert!(!p.force_external);
        assert_eq!(p.info, None);
        assert_eq!(p.image, "");
    }

    #[test]
    fn non_array_items_are_ignored() {
        let node: CategoryNode =
            serde_json::from_str(r#"{"name": "Food", "items": "soon"}"#).unwrap();
        assert_eq!(node.items, None);
        assert!(node.children.is_empty());
    }

    #[test]
    fn external_url_needs_the_flag() {
        let mut p = Product {
            url: Some("https://example.org".into()),
            ..Product::default()
        };
        assert_eq!(p.external_url(), None);
        p.force_external = true;
        assert_eq!(p.external_url(), Some("https://example.org"));
    }
}
