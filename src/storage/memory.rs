use std::collections::HashMap;

use crate::actor_framework::{Entity, Table};
use crate::domain::ProductId;

use super::StorageError;

/// In-process table. Ids come from `next_id_fn` and are never handed out twice,
/// so a deleted id stays dead.
pub struct MemoryTable<T: Entity> {
    rows: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id_fn: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: Entity> MemoryTable<T> {
    pub fn new(next_id_fn: impl FnMut() -> T::Id + Send + 'static) -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }
}

impl<T: Entity<Id = ProductId>> MemoryTable<T> {
    /// Ids 1, 2, 3, ... like an autoincrement primary key.
    pub fn sequential() -> Self {
        let mut next: ProductId = 0;
        Self::new(move || {
            next += 1;
            next
        })
    }
}

impl<T: Entity> Table<T> for MemoryTable<T> {
    fn insert(&mut self, fields: T::Fields) -> Result<T::Id, StorageError> {
        let row = T::from_create((self.next_id_fn)(), fields);
        let id = row.id();
        self.rows.insert(id, row);
        self.order.push(id);
        Ok(id)
    }

    fn get(&self, id: T::Id) -> Result<Option<T>, StorageError> {
        Ok(self.rows.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<T>, StorageError> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.rows.get(id).cloned())
            .collect())
    }

    fn update(&mut self, id: T::Id, patch: T::Patch) -> Result<usize, StorageError> {
        match self.rows.get_mut(&id) {
            Some(row) => {
                row.on_update(patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete(&mut self, id: T::Id) -> Result<usize, StorageError> {
        match self.rows.remove(&id) {
            Some(_) => {
                self.order.retain(|kept| *kept != id);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, ProductFields, ProductPatch};

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut table = MemoryTable::<Product>::sequential();
        let first = table.insert(ProductFields::new("A", 1, 1, "")).unwrap();
        assert_eq!(table.delete(first).unwrap(), 1);
        let second = table.insert(ProductFields::new("B", 1, 1, "")).unwrap();
        assert_ne!(first, second);
        assert!(table.get(first).unwrap().is_none());
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut table = MemoryTable::<Product>::sequential();
        for name in ["A", "B", "C"] {
            table.insert(ProductFields::new(name, 0, 0, "")).unwrap();
        }
        table.delete(2).unwrap();
        let names: Vec<String> = table.list().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn update_on_missing_row_touches_nothing() {
        let mut table = MemoryTable::<Product>::sequential();
        assert_eq!(table.update(99, ProductPatch::stock(4)).unwrap(), 0);
        assert!(table.list().unwrap().is_empty());
    }
}
