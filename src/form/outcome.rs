use std::fmt;

use crate::domain::ProductId;

/// What a save did. Store failures land here as values, never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    /// Untouched new form: nothing was written.
    Skipped,
    Inserted(ProductId),
    InsertFailed,
    Updated,
    /// The bound row is gone or the write failed.
    UpdateFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleResult {
    NoStock,
    SaleApplied(u32),
    SaleFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestockResult {
    RestockApplied(u32),
    RestockFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteResult {
    Deleted,
    DeleteFailed,
}

impl fmt::Display for SaveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveResult::Skipped => write!(f, "Nothing to save"),
            SaveResult::Inserted(_) => write!(f, "Product saved"),
            SaveResult::InsertFailed => write!(f, "Error with saving product"),
            SaveResult::Updated => write!(f, "Product updated"),
            SaveResult::UpdateFailed => write!(f, "Error with updating product"),
        }
    }
}

impl fmt::Display for SaleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleResult::NoStock => write!(f, "No stock left"),
            SaleResult::SaleApplied(stock) => write!(f, "Sale recorded, stock now {}", stock),
            SaleResult::SaleFailed => write!(f, "Error with sale update"),
        }
    }
}

impl fmt::Display for RestockResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestockResult::RestockApplied(stock) => write!(f, "Stock increased to {}", stock),
            RestockResult::RestockFailed => write!(f, "Error with restock update"),
        }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteResult::Deleted => write!(f, "Product deleted"),
            DeleteResult::DeleteFailed => write!(f, "Error with deleting product"),
        }
    }
}
