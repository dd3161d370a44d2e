// src/state.rs
use std::sync::Arc;

use crate::services::catalog::ProductCatalog;
use crate::services::pricing::PricingService;
use crate::services::profile_store::ProfileStore;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProductCatalog>,
    pub pricing: Arc<PricingService>,
}

impl AppState {
    pub fn new(catalog: ProductCatalog, store: ProfileStore) -> Self {
        let catalog = Arc::new(catalog);
        let pricing = Arc::new(PricingService::new(catalog.clone(), store));
        Self { catalog, pricing }
    }

    /// Seeded catalog and an empty profile store.
    pub fn seeded() -> Self {
        Self::new(ProductCatalog::seeded(), ProfileStore::new())
    }
}
