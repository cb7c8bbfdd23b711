//! Card catalog model and the load, filter and sort pipeline.
//!
//! A catalog is a pipe-delimited text file with a header row. Loading turns
//! it into an ordered list of [`Card`]s held by a [`CardStore`]; the filter
//! and sort engines are pure functions over card slices so the same data can
//! be queried repeatedly with different criteria.

pub mod card;
pub mod error;
pub mod filter;
pub mod loader;
pub mod sort;
pub mod stats;
pub mod store;
pub mod tags;
pub mod totals;
pub mod type_parser;
pub mod view;

pub use card::Card;
pub use error::CatalogError;
pub use filter::{FilterCriteria, filter_by_tag, filter_cards};
pub use loader::{
    LineFilter, LoadOptions, Record, cards_from_records, load_catalog, load_catalog_file,
    load_catalog_with, parse_records, read_catalog_text,
};
pub use sort::{SortContext, SortKey, reverse, sort_baseline, sort_cards};
pub use stats::{
    CountRow, duplicate_names, location_stats, pack_options, pack_stats, resolved_pack_id,
};
pub use store::CardStore;
pub use tags::{collection_tags, strip_tags};
pub use totals::{Totals, profit_label, total_spent};
pub use type_parser::ParsedType;
pub use view::{ViewOptions, apply_view, unique_names};
