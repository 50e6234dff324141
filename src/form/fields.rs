use crate::domain::{Product, ProductFields};

use super::error::FormError;

pub const STOCK_FIELD: &str = "stock";
pub const PRICE_FIELD: &str = "price";

/// Raw text of the editor's inputs, exactly as the UI holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorFields {
    pub name: String,
    pub stock: String,
    pub price: String,
    /// Picture reference chosen by the user; empty when none was picked.
    pub picture: String,
}

/// Result of the editor's local +/- stock buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStep {
    Changed(u32),
    NoStock,
}

impl EditorFields {
    pub fn new(
        name: impl Into<String>,
        stock: impl Into<String>,
        price: impl Into<String>,
        picture: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            stock: stock.into(),
            price: price.into(),
            picture: picture.into(),
        }
    }

    /// True when every input is blank after trimming and no picture was chosen.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.stock.trim().is_empty()
            && self.price.trim().is_empty()
            && self.picture.trim().is_empty()
    }

    /// Trims, applies defaults and parses into a full record.
    ///
    /// A blank name becomes `needs_name`, blank stock and price become 0, and a
    /// blank picture is stored as the empty string.
    pub fn to_record(&self, needs_name: &str) -> Result<ProductFields, FormError> {
        let name = match self.name.trim() {
            "" => needs_name.to_string(),
            name => name.to_string(),
        };
        Ok(ProductFields {
            name,
            stock: parse_count(STOCK_FIELD, &self.stock)?,
            price: parse_count(PRICE_FIELD, &self.price)?,
            picture: self.picture.trim().to_string(),
        })
    }

    /// Moves the stock text up or down by one without touching the store.
    pub fn step_stock(&mut self, increase: bool) -> Result<StockStep, FormError> {
        let current = parse_count(STOCK_FIELD, &self.stock)?;
        let next = if increase {
            current.checked_add(1)
        } else {
            current.checked_sub(1)
        };
        match next {
            Some(stock) => {
                self.stock = stock.to_string();
                Ok(StockStep::Changed(stock))
            }
            None if increase => Err(FormError::InvalidNumber {
                field: STOCK_FIELD,
                value: self.stock.clone(),
            }),
            None => Ok(StockStep::NoStock),
        }
    }
}

impl From<&Product> for EditorFields {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            stock: product.stock.to_string(),
            price: product.price.to_string(),
            picture: product.picture.clone(),
        }
    }
}

/// Blank text counts as 0; anything else must be a non-negative integer.
fn parse_count(field: &'static str, raw: &str) -> Result<u32, FormError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<u32>().map_err(|_| FormError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEEDS_NAME: &str = "Needs a name";

    #[test]
    fn blank_inputs_take_defaults() {
        let fields = EditorFields::new("  ", "", " ", "");
        let record = fields.to_record(NEEDS_NAME).unwrap();
        assert_eq!(record, ProductFields::new(NEEDS_NAME, 0, 0, ""));
    }

    #[test]
    fn inputs_are_trimmed() {
        let fields = EditorFields::new(" Widget ", " 3", "10 ", " content://pic/9 ");
        let record = fields.to_record(NEEDS_NAME).unwrap();
        assert_eq!(record, ProductFields::new("Widget", 3, 10, "content://pic/9"));
    }

    #[test]
    fn unparsable_numbers_are_rejected() {
        let err = EditorFields::new("Widget", "three", "10", "")
            .to_record(NEEDS_NAME)
            .unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidNumber {
                field: STOCK_FIELD,
                value: "three".into()
            }
        );

        let err = EditorFields::new("Widget", "1", "-5", "")
            .to_record(NEEDS_NAME)
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidNumber { field: PRICE_FIELD, .. }));
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(EditorFields::new(" ", "\t", "", "").is_blank());
        assert!(!EditorFields::new("", "", "", "content://pic/1").is_blank());
        assert!(!EditorFields::new("", "0", "", "").is_blank());
    }

    #[test]
    fn stepping_stock_stops_at_zero() {
        let mut fields = EditorFields::new("Widget", "1", "10", "");
        assert_eq!(fields.step_stock(false).unwrap(), StockStep::Changed(0));
        assert_eq!(fields.stock, "0");
        assert_eq!(fields.step_stock(false).unwrap(), StockStep::NoStock);
        assert_eq!(fields.stock, "0");
        assert_eq!(fields.step_stock(true).unwrap(), StockStep::Changed(1));
        assert_eq!(fields.stock, "1");
    }

    #[test]
    fn editor_text_mirrors_a_stored_product() {
        let product = Product {
            id: 4,
            name: "Widget".into(),
            stock: 3,
            price: 10,
            picture: String::new(),
        };
        assert_eq!(EditorFields::from(&product), EditorFields::new("Widget", "3", "10", ""));
    }
}
