use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::actor_framework::Table;
use crate::domain::columns::{ID, NAME, PICTURE, PRICE, STOCK, TABLE};
use crate::domain::{Product, ProductFields, ProductId, ProductPatch};

use super::StorageError;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS products (
    _id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    stock INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0),
    price INTEGER NOT NULL DEFAULT 0,
    picture TEXT
)";

/// Durable products table. AUTOINCREMENT keeps deleted ids from coming back.
pub struct SqliteProductTable {
    conn: Connection,
}

impl SqliteProductTable {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        info!(path = %path.display(), "Opening products database");
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        info!("Opening in-memory products database");
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(CREATE_TABLE_SQL)?;
        Ok(Self { conn })
    }
}

fn to_count(column: &'static str, value: i64) -> Result<u32, StorageError> {
    u32::try_from(value).map_err(|_| StorageError::OutOfRange { column, value })
}

struct RawRow {
    id: ProductId,
    name: String,
    stock: i64,
    price: i64,
    picture: Option<String>,
}

impl RawRow {
    fn from_sql_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            stock: row.get(2)?,
            price: row.get(3)?,
            picture: row.get(4)?,
        })
    }

    fn into_product(self) -> Result<Product, StorageError> {
        Ok(Product {
            id: self.id,
            name: self.name,
            stock: to_count(STOCK, self.stock)?,
            price: to_count(PRICE, self.price)?,
            picture: self.picture.unwrap_or_default(),
        })
    }
}

fn select_sql(filter: &str) -> String {
    format!("SELECT {ID}, {NAME}, {STOCK}, {PRICE}, {PICTURE} FROM {TABLE}{filter}")
}

impl Table<Product> for SqliteProductTable {
    fn insert(&mut self, fields: ProductFields) -> Result<ProductId, StorageError> {
        self.conn.execute(
            &format!("INSERT INTO {TABLE} ({NAME}, {STOCK}, {PRICE}, {PICTURE}) VALUES (?1, ?2, ?3, ?4)"),
            params![fields.name, fields.stock, fields.price, fields.picture],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get(&self, id: ProductId) -> Result<Option<Product>, StorageError> {
        let raw = self
            .conn
            .query_row(&select_sql(&format!(" WHERE {ID} = ?1")), params![id], RawRow::from_sql_row)
            .optional()?;
        raw.map(RawRow::into_product).transpose()
    }

    fn list(&self) -> Result<Vec<Product>, StorageError> {
        let mut stmt = self.conn.prepare(&select_sql(&format!(" ORDER BY {ID}")))?;
        let rows = stmt.query_map([], RawRow::from_sql_row)?;
        let mut products = Vec::new();
        for raw in rows {
            products.push(raw?.into_product()?);
        }
        Ok(products)
    }

    fn update(&mut self, id: ProductId, patch: ProductPatch) -> Result<usize, StorageError> {
        let mut assignments: Vec<String> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(name) = patch.name {
            assignments.push(format!("{NAME} = ?"));
            values.push(Value::Text(name));
        }
        if let Some(stock) = patch.stock {
            assignments.push(format!("{STOCK} = ?"));
            values.push(Value::Integer(i64::from(stock)));
        }
        if let Some(price) = patch.price {
            assignments.push(format!("{PRICE} = ?"));
            values.push(Value::Integer(i64::from(price)));
        }
        if let Some(picture) = patch.picture {
            assignments.push(format!("{PICTURE} = ?"));
            values.push(Value::Text(picture));
        }

        if assignments.is_empty() {
            // Nothing to write; report whether the row is there.
            let count: i64 = self.conn.query_row(
                &format!("SELECT COUNT(*) FROM {TABLE} WHERE {ID} = ?1"),
                params![id],
                |row| row.get(0),
            )?;
            return Ok(count as usize);
        }

        values.push(Value::Integer(id));
        let sql = format!("UPDATE {TABLE} SET {} WHERE {ID} = ?", assignments.join(", "));
        debug!(sql = %sql, "Executing update");
        Ok(self.conn.execute(&sql, params_from_iter(values.iter()))?)
    }

    fn delete(&mut self, id: ProductId) -> Result<usize, StorageError> {
        Ok(self
            .conn
            .execute(&format!("DELETE FROM {TABLE} WHERE {ID} = ?1"), params![id])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn insert_then_read_one_returns_the_inserted_fields() {
        let mut table = SqliteProductTable::open_in_memory().unwrap();
        let id = table.insert(ProductFields::new("Widget", 3, 10, "")).unwrap();

        let product = table.get(id).unwrap().unwrap();
        assert_eq!(
            product,
            Product {
                id,
                name: "Widget".into(),
                stock: 3,
                price: 10,
                picture: String::new(),
            }
        );
    }

    #[test]
    fn partial_update_only_writes_present_columns() {
        let mut table = SqliteProductTable::open_in_memory().unwrap();
        let id = table.insert(ProductFields::new("Widget", 3, 10, "content://pic/1")).unwrap();

        assert_eq!(table.update(id, ProductPatch::stock(2)).unwrap(), 1);

        let product = table.get(id).unwrap().unwrap();
        assert_eq!(product.stock, 2);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 10);
        assert_eq!(product.picture, "content://pic/1");
    }

    #[test]
    fn stale_ids_affect_zero_rows() {
        let mut table = SqliteProductTable::open_in_memory().unwrap();
        let id = table.insert(ProductFields::new("Widget", 3, 10, "")).unwrap();

        assert_eq!(table.delete(id).unwrap(), 1);
        assert_eq!(table.delete(id).unwrap(), 0);
        assert_eq!(table.update(id, ProductPatch::stock(1)).unwrap(), 0);
        assert_eq!(table.update(id, ProductPatch::default()).unwrap(), 0);
        assert!(table.get(id).unwrap().is_none());
    }

    #[test]
    fn autoincrement_never_reuses_a_deleted_id() {
        let mut table = SqliteProductTable::open_in_memory().unwrap();
        let first = table.insert(ProductFields::new("A", 0, 0, "")).unwrap();
        table.delete(first).unwrap();
        let second = table.insert(ProductFields::new("B", 0, 0, "")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn null_picture_reads_back_empty() {
        let table = SqliteProductTable::open_in_memory().unwrap();
        table
            .conn
            .execute(
                "INSERT INTO products (name, stock, price, picture) VALUES ('Legacy', 1, 1, NULL)",
                [],
            )
            .unwrap();

        let products = table.list().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].picture, "");
    }

    #[test]
    fn rows_survive_reopening_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.sqlite");

        let id = {
            let mut table = SqliteProductTable::open(&path).unwrap();
            table.insert(ProductFields::new("Widget", 3, 10, "")).unwrap()
        };

        let table = SqliteProductTable::open(&path).unwrap();
        let product = table.get(id).unwrap().unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(table.list().unwrap().len(), 1);
    }
}
