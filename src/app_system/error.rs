use thiserror::Error;

use crate::form::FormError;
use crate::product_store::ProductError;
use crate::storage::StorageError;

/// Top-level error for startup, shutdown and the demo walkthrough.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Store actor task failed: {0}")]
    Shutdown(String),
}
