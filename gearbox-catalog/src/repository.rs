use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Car, Part, PartFilter};

/// Repository trait for catalog data access
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn insert_car(
        &self,
        model: &str,
        year: i32,
    ) -> Result<Car, Box<dyn std::error::Error + Send + Sync>>;

    async fn insert_part(
        &self,
        name: &str,
        price: Decimal,
        owner: Option<i64>,
    ) -> Result<Part, Box<dyn std::error::Error + Send + Sync>>;

    async fn car_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Car>, Box<dyn std::error::Error + Send + Sync>>;

    async fn part_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Part>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_cars(&self) -> Result<Vec<Car>, Box<dyn std::error::Error + Send + Sync>>;

    async fn parts_for_car(
        &self,
        car_id: i64,
    ) -> Result<Vec<Part>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_parts(
        &self,
        filter: &PartFilter,
    ) -> Result<Vec<Part>, Box<dyn std::error::Error + Send + Sync>>;

    /// Removes a part and any order lines referencing it. Returns the public
    /// ids of orders that lost lines so their totals can be recomputed.
    async fn delete_part(
        &self,
        id: i64,
    ) -> Result<Vec<Uuid>, Box<dyn std::error::Error + Send + Sync>>;
}
