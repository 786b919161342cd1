use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::error::{AppError, AppResult};
use crate::models::Product;

/// Resolves a single product by exact identifier.
#[derive(Clone)]
pub struct LookupService {
    catalog: Arc<CatalogStore>,
}

impl LookupService {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// A miss surfaces as an explicit `ProductNotFound` checked by the
    /// caller. No side effects.
    pub fn get_product(&self, product_id: &str) -> AppResult<Product> {
        self.catalog
            .find_by_id(product_id)
            .cloned()
            .ok_or_else(|| AppError::ProductNotFound(product_id.to_string()))
    }
}
