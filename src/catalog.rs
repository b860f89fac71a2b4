//! Product Catalog

use rustc_hash::FxHashMap;

use crate::products::{Category, ProductRef};

/// Source of authoritative product snapshots.
///
/// The cart engine never calls the catalog itself; callers are expected to
/// source a fresh [`ProductRef`] from it on every add so the captured price is
/// current, rather than reusing a stale cached copy.
pub trait ProductCatalog {
    /// Looks up a product by category and id.
    fn product(&self, category: Category, id: &str) -> Option<ProductRef>;
}

/// In-memory catalog keyed by `(Category, id)`.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: FxHashMap<(Category, String), ProductRef>,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a product, replacing any previous snapshot with the same
    /// identity.
    pub fn insert(&mut self, product: ProductRef) {
        self.products
            .insert((product.category, product.id.clone()), product);
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for StaticCatalog {
    fn product(&self, category: Category, id: &str) -> Option<ProductRef> {
        self.products.get(&(category, id.to_string())).cloned()
    }
}

impl FromIterator<ProductRef> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = ProductRef>>(iter: I) -> Self {
        let mut catalog = Self::new();

        for product in iter {
            catalog.insert(product);
        }

        catalog
    }
}
