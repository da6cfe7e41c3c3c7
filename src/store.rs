use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::product::Product;

/// In-memory product collection plus the id generator.
///
/// The list is append-ordered; listing returns insertion order. Ids are
/// handed out by an atomic counter starting at 1 and are never reused,
/// including after deletion. The store enforces no uniqueness rule itself —
/// the duplicate constraint lives in the validation layer, and the
/// check-then-insert sequence is not a single critical section (see
/// DESIGN.md).
pub struct ProductStore {
    products: Mutex<Vec<Product>>,
    counter: AtomicU64,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: Mutex::new(Vec::new()),
            counter: AtomicU64::new(1),
        }
    }

    /// Snapshot of the current contents in insertion order.
    pub fn list_all(&self) -> Vec<Product> {
        self.products.lock().expect("store lock poisoned").clone()
    }

    /// Linear scan by id.
    pub fn find_by_id(&self, id: u64) -> Option<Product> {
        self.products
            .lock()
            .expect("store lock poisoned")
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
    }

    /// Linear scan for a record matching both `serie` and `codigoBarra`.
    pub fn find_duplicate(&self, serie: i64, codigo_barra: i64) -> Option<Product> {
        self.products
            .lock()
            .expect("store lock poisoned")
            .iter()
            .find(|p| p.serie == serie && p.codigo_barra == codigo_barra)
            .cloned()
    }

    /// Assign the next id and append. The returned record carries the id.
    pub fn insert(&self, mut product: Product) -> Product {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        product.id = Some(id);

        self.products
            .lock()
            .expect("store lock poisoned")
            .push(product.clone());

        product
    }

    /// Remove the first structurally-equal entry. Callers confirm existence
    /// beforehand; a vanished entry makes this a no-op.
    pub fn remove(&self, product: &Product) {
        let mut products = self.products.lock().expect("store lock poisoned");
        if let Some(pos) = products.iter().position(|p| p == product) {
            products.remove(pos);
        }
    }

    pub fn len(&self) -> usize {
        self.products.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(nome: &str, codigo_barra: i64, serie: i64) -> Product {
        Product::from_draft(
            json!({"nome": nome, "codigoBarra": codigo_barra, "serie": serie})
                .as_object()
                .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn insert_assigns_increasing_ids_starting_at_one() {
        let store = ProductStore::new();

        let a = store.insert(product("a", 1, 1));
        let b = store.insert(product("b", 2, 2));
        let c = store.insert(product("c", 3, 3));

        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(c.id, Some(3));
    }

    #[test]
    fn ids_are_never_reused_after_deletion() {
        let store = ProductStore::new();

        let a = store.insert(product("a", 1, 1));
        store.remove(&a);
        let b = store.insert(product("b", 2, 2));

        assert_eq!(b.id, Some(2));
    }

    #[test]
    fn list_all_preserves_insertion_order_across_removal() {
        let store = ProductStore::new();

        store.insert(product("a", 1, 1));
        let b = store.insert(product("b", 2, 2));
        store.insert(product("c", 3, 3));

        store.remove(&b);

        let names: Vec<String> = store.list_all().into_iter().map(|p| p.nome).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn find_by_id_scans_linearly() {
        let store = ProductStore::new();
        store.insert(product("a", 1, 1));
        let b = store.insert(product("b", 2, 2));

        assert_eq!(store.find_by_id(2), Some(b));
        assert_eq!(store.find_by_id(99), None);
    }

    #[test]
    fn find_duplicate_matches_the_pair_only() {
        let store = ProductStore::new();
        store.insert(product("a", 111, 222));

        assert!(store.find_duplicate(222, 111).is_some());
        assert!(store.find_duplicate(222, 999).is_none());
        assert!(store.find_duplicate(999, 111).is_none());
    }

    #[test]
    fn store_does_not_enforce_uniqueness_itself() {
        // Uniqueness belongs to the validation layer; a direct insert of a
        // matching pair is accepted.
        let store = ProductStore::new();
        store.insert(product("a", 1, 1));
        store.insert(product("a2", 1, 1));

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_is_a_noop_for_absent_entries() {
        let store = ProductStore::new();
        let a = store.insert(product("a", 1, 1));
        store.remove(&a);
        store.remove(&a);

        assert!(store.is_empty());
    }
}
