use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductFields, ProductId, ProductPatch};
use crate::impl_basic_client;
use crate::product_store::ProductError;

/// Client for the product store actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    /// Inserts a full row and returns the id the store assigned.
    #[instrument(skip(self, record), fields(product_name = %record.name))]
    pub async fn insert_product(&self, record: ProductFields) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.insert(record).await.map_err(ProductError::from)
    }

    /// Writes the columns present in `patch`. `Ok(0)` means the row is gone.
    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, id: ProductId, patch: ProductPatch) -> Result<usize, ProductError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(ProductError::from)
    }
}
