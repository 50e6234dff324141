use crate::actor_framework::Entity;
use crate::domain::columns::TABLE;
use crate::domain::{Product, ProductFields, ProductId, ProductPatch};

impl Entity for Product {
    type Id = ProductId;
    type Fields = ProductFields;
    type Patch = ProductPatch;
    const TABLE: &'static str = TABLE;

    fn id(&self) -> ProductId {
        self.id
    }

    fn from_create(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            stock: fields.stock,
            price: fields.price,
            picture: fields.picture,
        }
    }

    /// Overwrites each column the patch carries; `id` is never touched.
    fn on_update(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(picture) = patch.picture {
            self.picture = picture;
        }
    }
}
