//! In-memory catalog loaded from a JSON file at startup.
//!
//! The catalog file groups products by category:
//!
//! ```json
//! {
//!   "products": [
//!     { "category": "Coffee Machines", "slug": "coffee-machines", "items": [ ... ] }
//!   ]
//! }
//! ```
//!
//! Products that fail validation (negative price, out-of-range discount or
//! rating) and duplicate ids are skipped with a warning rather than failing
//! the whole load, so one bad entry never takes the site down.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use roastline_catalog::types::{Category, categories_with_counts, slugify};
use roastline_catalog::Product;

/// Errors loading the catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(String),
    #[error("Failed to parse catalog file: {0}")]
    Parse(String),
}

/// Top-level shape of the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(alias = "Products")]
    products: Vec<CategoryEntry>,
}

/// One category block in the catalog file.
#[derive(Debug, Deserialize)]
struct CategoryEntry {
    category: String,
    #[serde(default)]
    slug: Option<String>,
    items: Vec<Product>,
}

/// Catalog store that holds all products in memory.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<Vec<Product>>,
    categories: Arc<Vec<Category>>,
}

impl CatalogStore {
    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let store = Self::from_json(&raw)?;
        tracing::info!(
            products = store.len(),
            categories = store.categories().len(),
            "Catalog loaded from {:?}",
            path
        );
        Ok(store)
    }

    /// Parse a catalog from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not match the catalog shape.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut products: Vec<Product> = Vec::new();
        for entry in file.products {
            let slug = entry
                .slug
                .unwrap_or_else(|| slugify(&entry.category));
            for mut product in entry.items {
                product.category = slug.clone();
                if let Err(e) = product.validate() {
                    tracing::warn!("Skipping product {}: {}", product.id, e);
                    continue;
                }
                if products.iter().any(|p| p.id == product.id) {
                    tracing::warn!("Skipping duplicate product id: {}", product.id);
                    continue;
                }
                products.push(product);
            }
        }

        let categories = categories_with_counts(&products);

        Ok(Self {
            products: Arc::new(products),
            categories: Arc::new(categories),
        })
    }

    /// All products in catalog-file order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Categories present in the catalog, with product counts.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Total number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
