use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The catalog file could not be read
    #[error("{message} ({detail})")]
    Catalog { message: String, detail: String },

    /// Shop or wishlist data could not be read
    #[error("Shop data error: {0}")]
    Shop(String),

    /// Settings error
    #[error("Config error: {0}")]
    Config(String),

    /// Nothing matched the request
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CliError {
    pub(crate) fn catalog(message: impl Into<String>, detail: impl ToString) -> Self {
        Self::Catalog {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub(crate) fn shop(msg: impl ToString) -> Self {
        Self::Shop(msg.to_string())
    }

    pub(crate) fn config(msg: impl ToString) -> Self {
        Self::Config(msg.to_string())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
