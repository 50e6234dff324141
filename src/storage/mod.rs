//! Table backends for the store actor.
//!
//! [`MemoryTable`] keeps rows in process memory for any [`Entity`](crate::actor_framework::Entity).
//! [`SqliteProductTable`] is the durable products table.

mod memory;
mod sqlite;

pub use memory::*;
pub use sqlite::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("column {column} holds out-of-range value {value}")]
    OutOfRange { column: &'static str, value: i64 },
}
