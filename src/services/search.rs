use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::models::Product;

/// Case-insensitive substring search over product names.
#[derive(Clone)]
pub struct SearchService {
    catalog: Arc<CatalogStore>,
}

impl SearchService {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Keeps every product whose name contains `term` after case folding,
    /// preserving load order. The empty term matches the whole catalog; no
    /// match is an empty result, never an error.
    pub fn search_products(&self, term: &str) -> Vec<Product> {
        let term = term.to_lowercase();
        self.catalog
            .all()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }
}
