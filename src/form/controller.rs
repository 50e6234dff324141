use tracing::{debug, error, info, instrument, warn};

use crate::clients::ProductClient;
use crate::domain::{ProductId, ProductPatch};
use crate::product_store::ProductError;

use super::error::FormError;
use super::fields::EditorFields;
use super::outcome::{DeleteResult, RestockResult, SaleResult, SaveResult};

/// Turns editor input into store writes and store answers into typed results.
///
/// Holds no per-form state: which product a form is bound to is passed in on
/// every call. Persistence failures never escape as errors; they come back as
/// the `*Failed` variants for the UI to report.
#[derive(Clone)]
pub struct ProductFormController {
    store: ProductClient,
    needs_name: String,
}

impl ProductFormController {
    pub fn new(store: ProductClient, needs_name: impl Into<String>) -> Self {
        Self {
            store,
            needs_name: needs_name.into(),
        }
    }

    /// Inserts when `bound_id` is `None`, otherwise updates the bound row.
    ///
    /// # Errors
    /// [`FormError::InvalidNumber`] when stock or price text is not a
    /// non-negative integer. Nothing is written in that case.
    #[instrument(skip(self, input))]
    pub async fn save(
        &self,
        bound_id: Option<ProductId>,
        input: &EditorFields,
    ) -> Result<SaveResult, FormError> {
        if bound_id.is_none() && input.is_blank() {
            debug!("Untouched new form, skipping save");
            return Ok(SaveResult::Skipped);
        }

        let record = input.to_record(&self.needs_name).map_err(|e| {
            warn!(error = %e, "Form validation failed");
            e
        })?;

        let result = match bound_id {
            None => match self.store.insert_product(record).await {
                Ok(id) => {
                    info!(product_id = id, "Product inserted");
                    SaveResult::Inserted(id)
                }
                Err(e) => {
                    error!(error = %e, "Product insert failed");
                    SaveResult::InsertFailed
                }
            },
            Some(id) => match self.store.update_product(id, ProductPatch::from(record)).await {
                Ok(0) => {
                    warn!(product_id = id, "Bound product no longer exists");
                    SaveResult::UpdateFailed
                }
                Ok(_) => {
                    info!(product_id = id, "Product updated");
                    SaveResult::Updated
                }
                Err(e) => {
                    error!(product_id = id, error = %e, "Product update failed");
                    SaveResult::UpdateFailed
                }
            },
        };
        Ok(result)
    }

    /// Sells one unit from a list row. `current_stock` is the count the row
    /// is showing; a row showing 0 never reaches the store.
    #[instrument(skip(self))]
    pub async fn quick_sell(&self, id: ProductId, current_stock: u32) -> SaleResult {
        let Some(stock) = current_stock.checked_sub(1) else {
            debug!("Nothing left to sell");
            return SaleResult::NoStock;
        };

        if self.write_stock(id, stock).await {
            SaleResult::SaleApplied(stock)
        } else {
            SaleResult::SaleFailed
        }
    }

    /// Adds one unit. There is no upper bound short of the counter's range.
    #[instrument(skip(self))]
    pub async fn quick_restock(&self, id: ProductId, current_stock: u32) -> RestockResult {
        let Some(stock) = current_stock.checked_add(1) else {
            warn!("Stock counter is at its maximum");
            return RestockResult::RestockFailed;
        };

        if self.write_stock(id, stock).await {
            RestockResult::RestockApplied(stock)
        } else {
            RestockResult::RestockFailed
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> DeleteResult {
        match self.store.delete_product(id).await {
            Ok(0) => {
                warn!("Product to delete does not exist");
                DeleteResult::DeleteFailed
            }
            Ok(_) => {
                info!("Product deleted");
                DeleteResult::Deleted
            }
            Err(e) => {
                error!(error = %e, "Product delete failed");
                DeleteResult::DeleteFailed
            }
        }
    }

    /// Reads one product into editor text for an edit session.
    #[instrument(skip(self))]
    pub async fn load(&self, id: ProductId) -> Result<EditorFields, ProductError> {
        match self.store.get_product(id).await? {
            Some(product) => Ok(EditorFields::from(&product)),
            None => {
                debug!("Product not found");
                Err(ProductError::NotFound(id))
            }
        }
    }

    async fn write_stock(&self, id: ProductId, stock: u32) -> bool {
        match self.store.update_product(id, ProductPatch::stock(stock)).await {
            Ok(0) => {
                warn!(product_id = id, "Stock update matched no product");
                false
            }
            Ok(_) => {
                info!(product_id = id, stock, "Stock updated");
                true
            }
            Err(e) => {
                error!(product_id = id, error = %e, "Stock update failed");
                false
            }
        }
    }
}
