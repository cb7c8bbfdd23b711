//! Shop and wishlist catalogs stored as JSON category trees.
//!
//! A data directory holds `categories.json` (the top-level index), one tree
//! file per root category, and optionally one product file per category path.
//! This crate reads those files, walks the trees, and prices products.

pub mod error;
mod lenient;
pub mod load;
pub mod pricing;
pub mod tree;
pub mod types;

pub use error::ShopError;
pub use load::{
    Listing, VisibleCategory, load_category_index, load_listing, load_products, load_tree,
    visible_categories,
};
pub use pricing::{PriceBreakdown, PricingMode};
pub use tree::{ResolvedPath, Subcategory, find_product, resolve, title_case};
pub use types::*;
