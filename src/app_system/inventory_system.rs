use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::actor_framework::{ResourceActor, Table};
use crate::clients::ProductClient;
use crate::domain::Product;
use crate::form::ProductFormController;
use crate::storage::{MemoryTable, SqliteProductTable};

use super::config::{InventoryConfig, StoreBackend};
use super::error::AppError;

/// Owns the running product store and hands out its callers.
///
/// Must be started from inside a tokio runtime: the store actor is spawned on it.
pub struct InventorySystem {
    pub product_client: ProductClient,
    needs_name: String,
    handle: JoinHandle<()>,
}

impl InventorySystem {
    /// Opens the configured table and starts the store actor.
    #[instrument(name = "inventory_system", skip(config), fields(backend = ?config.backend))]
    pub fn start(config: &InventoryConfig) -> Result<Self, AppError> {
        info!("Starting inventory system");
        let needs_name = config.needs_name.clone();
        let system = match &config.backend {
            StoreBackend::Memory => {
                Self::with_table(MemoryTable::<Product>::sequential(), config.store_buffer, needs_name)
            }
            StoreBackend::SqliteInMemory => {
                Self::with_table(SqliteProductTable::open_in_memory()?, config.store_buffer, needs_name)
            }
            StoreBackend::SqliteFile(path) => {
                Self::with_table(SqliteProductTable::open(path)?, config.store_buffer, needs_name)
            }
        };
        info!("Inventory system started successfully");
        Ok(system)
    }

    pub fn with_table(table: impl Table<Product>, store_buffer: usize, needs_name: impl Into<String>) -> Self {
        let (actor, resource_client) = ResourceActor::<Product>::new(store_buffer, table);
        let handle = tokio::spawn(actor.run());
        Self {
            product_client: ProductClient::new(resource_client),
            needs_name: needs_name.into(),
            handle,
        }
    }

    pub fn form_controller(&self) -> ProductFormController {
        ProductFormController::new(self.product_client.clone(), self.needs_name.clone())
    }

    /// Stops the store actor and waits for it to finish. Requests already
    /// queued ahead of the shutdown are still answered.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down inventory system");

        if let Err(e) = self.product_client.shutdown().await {
            // Actor already gone; the join below reports why.
            error!(error = %e, "Shutdown request not delivered");
        }

        self.handle.await.map_err(|e| {
            error!(error = ?e, "Store actor task failed");
            AppError::Shutdown(e.to_string())
        })?;

        info!("Inventory system shutdown complete");
        Ok(())
    }
}
