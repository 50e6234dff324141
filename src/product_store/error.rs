use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ProductId;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Product persistence error: {0}")]
    Persistence(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Storage(msg) => ProductError::Persistence(msg),
            other => ProductError::ActorCommunication(other.to_string()),
        }
    }
}
