/// Identifier assigned by the store when a product is first inserted.
pub type ProductId = i64;

/// Picture reference shown whenever a product has no picture of its own.
pub const NO_IMAGE: &str = "res://drawable/no_image";

/// Column names of the products table.
pub mod columns {
    pub const TABLE: &str = "products";
    pub const ID: &str = "_id";
    pub const NAME: &str = "name";
    pub const STOCK: &str = "stock";
    pub const PRICE: &str = "price";
    pub const PICTURE: &str = "picture";
}

/// Represents a product in the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub stock: u32,
    pub price: u32,
    /// Opaque URI or path of an externally stored image. Empty means no picture.
    pub picture: String,
}

impl Product {
    /// The picture reference to render, falling back to [`NO_IMAGE`].
    pub fn display_picture(&self) -> &str {
        if self.picture.is_empty() {
            NO_IMAGE
        } else {
            &self.picture
        }
    }
}

/// Payload for inserting a new product. Every column is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub stock: u32,
    pub price: u32,
    pub picture: String,
}

impl ProductFields {
    pub fn new(name: impl Into<String>, stock: u32, price: u32, picture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stock,
            price,
            picture: picture.into(),
        }
    }
}

/// Payload for updating an existing product. Only `Some` columns are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub stock: Option<u32>,
    pub price: Option<u32>,
    pub picture: Option<String>,
}

impl ProductPatch {
    /// A patch touching only the stock column.
    pub fn stock(stock: u32) -> Self {
        Self {
            stock: Some(stock),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.stock.is_none() && self.price.is_none() && self.picture.is_none()
    }
}

impl From<ProductFields> for ProductPatch {
    fn from(fields: ProductFields) -> Self {
        Self {
            name: Some(fields.name),
            stock: Some(fields.stock),
            price: Some(fields.price),
            picture: Some(fields.picture),
        }
    }
}
