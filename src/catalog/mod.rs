use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::Product;

/// Catalog data compiled into the binary; used unless `CATALOG_PATH` points
/// somewhere else.
static BUNDLED_PRODUCTS: &str = include_str!("../../data/products.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Owns the immutable in-memory product collection. Populated once at
/// startup and read-only afterwards, so concurrent handlers share it without
/// locking.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load the catalog from `path` when given, otherwise from the bundled
    /// resource. A missing, unreadable or malformed source degrades to an
    /// empty catalog instead of failing startup.
    pub fn load(path: Option<&Path>) -> Self {
        match Self::try_load(path) {
            Ok(store) => {
                info!(count = store.len(), "Catalog loaded");
                store
            }
            Err(err) => {
                warn!(error = %err, "Products not loaded, serving an empty catalog");
                Self::default()
            }
        }
    }

    fn try_load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let products = match path {
            Some(path) => {
                let raw =
                    std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
                        path: path.display().to_string(),
                        source,
                    })?;
                serde_json::from_str(&raw)?
            }
            None => serde_json::from_str(BUNDLED_PRODUCTS)?,
        };
        Ok(Self::new(products))
    }

    /// Full collection in load order. Callers get a read-only view.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// First product whose id matches exactly (case-sensitive), scanning in
    /// load order. Ids are not checked for uniqueness at load time; with a
    /// duplicate id the first occurrence wins.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
