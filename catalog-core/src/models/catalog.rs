use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::product::Product;
use super::sync_status::SyncStatus;

/// Where the products in a snapshot last came from wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// The embedded seed catalog.
    Seed,
    /// A full read of the remote table.
    Remote,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Seed => write!(f, "seed"),
            CatalogSource::Remote => write!(f, "remote"),
        }
    }
}

/// An immutable view of the product list published by the provider.
///
/// Every change bumps `revision`, so observers can tell snapshots apart
/// without comparing product lists.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
    status: HashMap<String, SyncStatus>,
    source: CatalogSource,
    revision: u64,
    loading: bool,
}

impl Catalog {
    /// Creates a snapshot where every product carries the same status.
    pub fn new(products: Vec<Product>, source: CatalogSource, status: SyncStatus) -> Self {
        let status = products.iter().map(|p| (p.id.clone(), status)).collect();
        Self {
            products,
            status,
            source,
            revision: 0,
            loading: false,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose category equals `category` exactly, in list order.
    pub fn by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn status(&self, id: &str) -> Option<SyncStatus> {
        self.status.get(id).copied()
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products that are not confirmed by the remote table.
    pub fn unconfirmed(&self) -> usize {
        self.status
            .values()
            .filter(|s| **s != SyncStatus::Confirmed)
            .count()
    }

    pub(crate) fn replace_all(
        &mut self,
        products: Vec<Product>,
        source: CatalogSource,
        status: SyncStatus,
    ) {
        self.status = products.iter().map(|p| (p.id.clone(), status)).collect();
        self.products = products;
        self.source = source;
        self.bump();
    }

    pub(crate) fn push(&mut self, product: Product, status: SyncStatus) {
        self.status.insert(product.id.clone(), status);
        self.products.push(product);
        self.bump();
    }

    /// Replaces the product with the same id. Returns false if none matched.
    pub(crate) fn replace(&mut self, product: Product, status: SyncStatus) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                self.status.insert(product.id.clone(), status);
                *slot = product;
                self.bump();
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return false;
        }
        self.status.remove(id);
        self.bump();
        true
    }

    /// Updates the status of `id` if it is still present.
    pub(crate) fn mark(&mut self, id: &str, status: SyncStatus) {
        if let Some(current) = self.status.get_mut(id) {
            if *current != status {
                *current = status;
                self.bump();
            }
        }
    }

    pub(crate) fn mark_all(&mut self, status: SyncStatus) {
        for current in self.status.values_mut() {
            *current = status;
        }
        self.bump();
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductDraft;

    fn product(id: &str, category: &str) -> Product {
        ProductDraft::new(format!("Product {}", id), category)
            .with_image(format!("/{}.png", id))
            .into_product(id)
    }

    fn sample() -> Catalog {
        Catalog::new(
            vec![
                product("1", "Razors"),
                product("2", "Toothbrush"),
                product("3", "Razors"),
            ],
            CatalogSource::Seed,
            SyncStatus::Confirmed,
        )
    }

    #[test]
    fn test_serializes_status_and_source() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["source"], "seed");
        assert_eq!(value["status"]["2"], "confirmed");
        assert_eq!(value["products"].as_array().unwrap().len(), 3);
        assert_eq!(value["revision"], 0);
    }

    #[test]
    fn test_by_category_preserves_order() {
        let catalog = sample();
        let ids: Vec<_> = catalog
            .by_category("Razors")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_replace_only_touches_matching_id() {
        let mut catalog = sample();
        let before = catalog.products().to_vec();

        let replacement = product("2", "Stationery");
        assert!(catalog.replace(replacement.clone(), SyncStatus::Pending));

        assert_eq!(catalog.get("2"), Some(&replacement));
        assert_eq!(catalog.get("1"), Some(&before[0]));
        assert_eq!(catalog.get("3"), Some(&before[2]));
        assert_eq!(catalog.status("2"), Some(SyncStatus::Pending));
    }

    #[test]
    fn test_replace_missing_id_is_noop() {
        let mut catalog = sample();
        let revision = catalog.revision();
        assert!(!catalog.replace(product("9", "Razors"), SyncStatus::Pending));
        assert_eq!(catalog.revision(), revision);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_remove() {
        let mut catalog = sample();
        assert!(catalog.remove("1"));
        assert!(!catalog.remove("1"));
        assert_eq!(catalog.len(), 2);
        assert!(catalog.status("1").is_none());
    }

    #[test]
    fn test_mutations_bump_revision() {
        let mut catalog = sample();
        let start = catalog.revision();
        catalog.push(product("4", "PVC Tape"), SyncStatus::Pending);
        catalog.mark("4", SyncStatus::LocalOnly);
        assert_eq!(catalog.revision(), start + 2);
        assert_eq!(catalog.unconfirmed(), 1);
    }

    #[test]
    fn test_replace_all_resets_status() {
        let mut catalog = sample();
        catalog.push(product("4", "PVC Tape"), SyncStatus::LocalOnly);
        catalog.replace_all(
            vec![product("5", "Razors")],
            CatalogSource::Remote,
            SyncStatus::Confirmed,
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.source(), CatalogSource::Remote);
        assert_eq!(catalog.unconfirmed(), 0);
        assert!(catalog.status("4").is_none());
    }
}
