use thiserror::Error;

/// The only failure the catalog core can surface.
///
/// Unknown slugs and unknown category filters are not errors; they come back
/// as empty collections or `None`. Everything past initialization is a
/// total-function contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CatalogError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
