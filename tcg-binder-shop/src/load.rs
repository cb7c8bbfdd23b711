//! Reading shop and wishlist data directories.
//!
//! Expected structure:
//! ```text
//! data_dir/
//!   categories.json       top-level index
//!   <root>.json           category tree for one root
//!   <root>/<child>.json   optional product list for a deeper path
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ShopError;
use crate::tree::{Subcategory, resolve};
use crate::types::{CategoryEntry, CategoryIndex, CategoryNode, CategoryTree, Product};

const INDEX_FILE: &str = "categories.json";

/// A category from the index whose product file has content.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleCategory {
    pub key: String,
    pub entry: CategoryEntry,
}

/// Everything an items page shows for one path.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub breadcrumb: String,
    /// Segments that resolved in the tree.
    pub path_walk: Vec<String>,
    pub subcategories: Vec<Subcategory>,
    pub products: Vec<Product>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.subcategories.is_empty() && self.products.is_empty()
    }
}

/// Product file contents: a bare array or an object with an `items` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductFile {
    List(Vec<Product>),
    Wrapped { items: Vec<Product> },
}

/// Load `categories.json` from a data directory.
pub fn load_category_index(dir: &Path) -> Result<CategoryIndex, ShopError> {
    ensure_dir(dir)?;
    read_json(&dir.join(INDEX_FILE))
}

/// Load the tree for `root`.
///
/// When `<root>.json` is missing or unreadable, a one-node tree is built from
/// the index entry of the same name.
pub fn load_tree(dir: &Path, root: &str) -> Result<CategoryTree, ShopError> {
    ensure_dir(dir)?;
    match read_json::<CategoryTree>(&dir.join(format!("{root}.json"))) {
        Ok(tree) => Ok(tree),
        Err(e) => {
            log::warn!("{e}; falling back to {INDEX_FILE}");
            let index = load_category_index(dir)?;
            let entry = index
                .get(root)
                .ok_or_else(|| ShopError::NotFound(format!("category '{root}'")))?;
            let node = CategoryNode {
                name: Some(entry.name.clone()).filter(|n| !n.is_empty()),
                image: Some(entry.image.clone()).filter(|i| !i.is_empty()),
                ..CategoryNode::default()
            };
            Ok(CategoryTree::from([(root.to_string(), node)]))
        }
    }
}

/// Load the product file for a category path.
pub fn load_products(dir: &Path, segments: &[&str]) -> Result<Vec<Product>, ShopError> {
    let path = product_file(dir, segments);
    let file: ProductFile = read_json(&path)?;
    Ok(match file {
        ProductFile::List(items) | ProductFile::Wrapped { items } => items,
    })
}

/// Resolve `segments` and gather subcategories and products.
///
/// Products embedded in the tree win; otherwise the path's product file is
/// read, and a missing or malformed one just means no products.
pub fn load_listing(dir: &Path, segments: &[&str]) -> Result<Listing, ShopError> {
    let root = segments
        .first()
        .ok_or_else(|| ShopError::NotFound("empty category path".to_string()))?;
    let tree = load_tree(dir, root)?;
    let resolved = resolve(&tree, segments);

    let mut products = resolved
        .embedded_items()
        .map(<[Product]>::to_vec)
        .unwrap_or_default();
    if products.is_empty() {
        products = match load_products(dir, segments) {
            Ok(items) => items,
            Err(e) => {
                log::debug!("No product list for {}: {}", segments.join("/"), e);
                Vec::new()
            }
        };
    }

    let listing = Listing {
        breadcrumb: resolved.breadcrumb(segments),
        path_walk: resolved.path_walk.clone(),
        subcategories: resolved.subcategories(),
        products,
    };
    if listing.is_empty() {
        log::info!("No subcategories and no products for {}", segments.join("/"));
    }
    Ok(listing)
}

/// Index categories whose product file exists and is not empty, in key order.
///
/// Categories with missing, malformed or empty files are skipped with a
/// warning. The file name is the key with spaces removed.
pub fn visible_categories(dir: &Path) -> Result<Vec<VisibleCategory>, ShopError> {
    let index = load_category_index(dir)?;
    let mut visible = Vec::new();
    for (key, entry) in index {
        let path = dir.join(format!("{}.json", key.replace(' ', "")));
        let value: Value = match read_json(&path) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("Skipping category \"{key}\": {e}");
                continue;
            }
        };
        let empty = match &value {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if empty {
            log::warn!("Skipping category \"{key}\": no items");
            continue;
        }
        visible.push(VisibleCategory { key, entry });
    }
    Ok(visible)
}

fn product_file(dir: &Path, segments: &[&str]) -> PathBuf {
    let mut path = dir.to_path_buf();
    if let Some((last, parents)) = segments.split_last() {
        for segment in parents {
            path.push(segment);
        }
        path.push(format!("{last}.json"));
    }
    path
}

fn ensure_dir(dir: &Path) -> Result<(), ShopError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(ShopError::DirNotFound(dir.display().to_string()))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ShopError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ShopError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| ShopError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
