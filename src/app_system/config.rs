use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

use super::error::AppError;

pub const BACKEND_VAR: &str = "INVENTORY_BACKEND";
pub const DB_PATH_VAR: &str = "INVENTORY_DB_PATH";
pub const NEEDS_NAME_VAR: &str = "INVENTORY_NEEDS_NAME";
pub const STORE_BUFFER_VAR: &str = "INVENTORY_STORE_BUFFER";

pub const DEFAULT_NEEDS_NAME: &str = "Needs a name";
pub const DEFAULT_STORE_BUFFER: usize = 32;

/// Where the products table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Plain process memory, no SQL engine.
    Memory,
    SqliteInMemory,
    SqliteFile(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub backend: StoreBackend,
    /// Name stored for products saved without one.
    pub needs_name: String,
    /// Capacity of the store actor's request channel.
    pub store_buffer: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::SqliteInMemory,
            needs_name: DEFAULT_NEEDS_NAME.to_string(),
            store_buffer: DEFAULT_STORE_BUFFER,
        }
    }
}

impl InventoryConfig {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();
        let config = Self::from_lookup(|name| env::var(name).ok())?;
        tracing::info!(backend = ?config.backend, store_buffer = config.store_buffer, "Configuration loaded");
        Ok(config)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let backend = match lookup(BACKEND_VAR).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("memory") => StoreBackend::Memory,
            None | Some("sqlite") => match lookup(DB_PATH_VAR).map(|v| v.trim().to_string()) {
                None => StoreBackend::SqliteInMemory,
                Some(path) if path.is_empty() || path == ":memory:" => StoreBackend::SqliteInMemory,
                Some(path) => StoreBackend::SqliteFile(PathBuf::from(path)),
            },
            Some(other) => {
                return Err(AppError::Config(format!(
                    "Invalid {}: {:?} (expected \"sqlite\" or \"memory\")",
                    BACKEND_VAR, other
                )))
            }
        };

        let needs_name = match lookup(NEEDS_NAME_VAR) {
            Some(text) if !text.trim().is_empty() => text.trim().to_string(),
            Some(_) => return Err(AppError::Config(format!("{} must not be blank", NEEDS_NAME_VAR))),
            None => DEFAULT_NEEDS_NAME.to_string(),
        };

        let store_buffer = match lookup(STORE_BUFFER_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| AppError::Config(format!("Invalid {}: {:?}", STORE_BUFFER_VAR, raw)))?,
            None => DEFAULT_STORE_BUFFER,
        };

        Ok(Self {
            backend,
            needs_name,
            store_buffer,
        })
    }
}
