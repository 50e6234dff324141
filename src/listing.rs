//! Row view model for the product list.

use crate::domain::{Product, ProductId};

/// One rendered line of the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub stock: u32,
    pub price: u32,
    /// Never empty: products without a picture show the placeholder.
    pub picture: String,
    /// The quick-sell button is hidden once stock reaches zero.
    pub sell_visible: bool,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            stock: product.stock,
            price: product.price,
            picture: product.display_picture().to_string(),
            sell_visible: product.stock > 0,
        }
    }
}

pub fn rows(products: &[Product]) -> Vec<ProductRow> {
    products.iter().map(ProductRow::from).collect()
}
