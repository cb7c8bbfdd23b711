use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
