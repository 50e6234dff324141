use thiserror::Error;

/// Raised when editor text cannot become a product record. The editor is
/// expected to filter input so this is rare, but it is never coerced to zero.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} must be a whole number of zero or more, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
