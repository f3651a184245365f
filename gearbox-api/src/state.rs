use std::sync::Arc;

use gearbox_catalog::CatalogService;
use gearbox_order::OrderService;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogService>, orders: Arc<OrderService>) -> Self {
        Self { catalog, orders }
    }
}
