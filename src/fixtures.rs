//! Fixtures

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::StaticCatalog,
    products::{Category, ProductRef},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// On-disk shape of one product entry.
#[derive(Debug, Deserialize)]
struct ProductFixture {
    name: String,
    price: u64,
}

/// On-disk shape of a products fixture file: one section per category, each
/// mapping product ids to entries. Ids are unique within their section only.
#[derive(Debug, Default, Deserialize)]
struct ProductsFixture {
    #[serde(default)]
    wines: FxHashMap<String, ProductFixture>,

    #[serde(default)]
    accessories: FxHashMap<String, ProductFixture>,

    #[serde(default)]
    gifts: FxHashMap<String, ProductFixture>,
}

/// Loader for YAML catalog fixtures under a base path.
#[derive(Debug)]
pub struct Fixture {
    base_path: PathBuf,
}

impl Fixture {
    /// Creates a fixture loader with the default base path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Creates a fixture loader with a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Loads a product catalog from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_products(&self, name: &str) -> Result<StaticCatalog, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        let mut catalog = StaticCatalog::new();

        insert_section(&mut catalog, Category::Wine, fixture.wines);
        insert_section(&mut catalog, Category::Accessory, fixture.accessories);
        insert_section(&mut catalog, Category::Gift, fixture.gifts);

        Ok(catalog)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_section(
    catalog: &mut StaticCatalog,
    category: Category,
    section: FxHashMap<String, ProductFixture>,
) {
    for (id, product) in section {
        catalog.insert(ProductRef::new(category, id, product.name, product.price));
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use crate::catalog::ProductCatalog;

    use super::*;

    #[test]
    fn storefront_fixture_loads_all_three_categories() -> TestResult {
        let catalog = Fixture::new().load_products("storefront")?;

        assert_eq!(catalog.len(), 7);

        let wine = catalog
            .product(Category::Wine, "dalat-classic-red")
            .ok_or("expected wine fixture")?;

        assert_eq!(wine.name, "Vang Đà Lạt Classic Red");
        assert_eq!(wine.price, 115_000);

        assert!(
            catalog
                .product(Category::Accessory, "lever-corkscrew")
                .is_some()
        );
        assert!(catalog.product(Category::Gift, "tet-hamper").is_some());

        Ok(())
    }

    #[test]
    fn fixture_sections_allow_cross_category_id_reuse() -> TestResult {
        let dir = tempfile::tempdir()?;
        let products_dir = dir.path().join("products");

        fs::create_dir_all(&products_dir)?;
        fs::write(
            products_dir.join("shared.yml"),
            "wines:\n  '42':\n    name: Vang\n    price: 100\ngifts:\n  '42':\n    name: Giỏ quà\n    price: 900\n",
        )?;

        let catalog = Fixture::with_base_path(dir.path()).load_products("shared")?;

        assert_eq!(catalog.len(), 2);
        assert!(catalog.product(Category::Wine, "42").is_some());
        assert!(catalog.product(Category::Gift, "42").is_some());

        Ok(())
    }

    #[test]
    fn missing_fixture_file_returns_io_error() {
        let result = Fixture::new().load_products("does-not-exist");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn malformed_yaml_returns_parse_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let products_dir = dir.path().join("products");

        fs::create_dir_all(&products_dir)?;
        fs::write(products_dir.join("broken.yml"), "wines: [not, a, map]\n")?;

        let result = Fixture::with_base_path(dir.path()).load_products("broken");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));

        Ok(())
    }

    #[test]
    fn missing_sections_default_to_empty() -> TestResult {
        let dir = tempfile::tempdir()?;
        let products_dir = dir.path().join("products");

        fs::create_dir_all(&products_dir)?;
        fs::write(
            products_dir.join("wines-only.yml"),
            "wines:\n  dalat-red:\n    name: Vang Đà Lạt\n    price: 115000\n",
        )?;

        let catalog = Fixture::with_base_path(dir.path()).load_products("wines-only")?;

        assert_eq!(catalog.len(), 1);

        Ok(())
    }
}
