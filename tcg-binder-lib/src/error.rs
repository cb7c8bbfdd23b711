use tcg_binder_catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A newer load started after this one; its result is discarded.
    #[error("Stale catalog load (generation {ticket}, current {current})")]
    StaleLoad { ticket: u64, current: u64 },
}
