use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("customer {0} already exists")]
    DuplicateKey(String),
    #[error("customer {0} not found")]
    NotFound(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}
