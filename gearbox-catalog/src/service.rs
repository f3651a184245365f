use std::sync::Arc;

use crate::models::{Car, Part, PartFilter};
use crate::repository::CatalogRepository;

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Car not found: {0}")]
    CarNotFound(i64),

    #[error("Part not found: {0}")]
    PartNotFound(i64),

    #[error("Catalog storage failed: {0}")]
    Storage(String),
}

/// Read-side facade over the catalog store. Order pricing resolves parts
/// through this service as well, so lookups stay on one code path.
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_cars(&self) -> Result<Vec<Car>, CatalogError> {
        self.repo
            .list_cars()
            .await
            .map_err(|e| CatalogError::Storage(e.to_string()))
    }

    pub async fn get_car(&self, id: i64) -> Result<Car, CatalogError> {
        self.repo
            .car_by_id(id)
            .await
            .map_err(|e| CatalogError::Storage(e.to_string()))?
            .ok_or(CatalogError::CarNotFound(id))
    }

    /// Fetch a car together with every part fitted to it.
    pub async fn car_parts(&self, car_id: i64) -> Result<(Car, Vec<Part>), CatalogError> {
        let car = self.get_car(car_id).await?;
        let parts = self
            .repo
            .parts_for_car(car_id)
            .await
            .map_err(|e| CatalogError::Storage(e.to_string()))?;
        Ok((car, parts))
    }

    pub async fn list_parts(&self, filter: &PartFilter) -> Result<Vec<Part>, CatalogError> {
        self.repo
            .list_parts(filter)
            .await
            .map_err(|e| CatalogError::Storage(e.to_string()))
    }

    pub async fn get_part(&self, id: i64) -> Result<Part, CatalogError> {
        self.repo
            .part_by_id(id)
            .await
            .map_err(|e| CatalogError::Storage(e.to_string()))?
            .ok_or(CatalogError::PartNotFound(id))
    }
}
