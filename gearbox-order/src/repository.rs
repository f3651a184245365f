use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{NewOrder, NewOrderLine, Order, OrderLine};

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists an order together with all of its lines, or nothing.
    /// Implementations must re-check every referenced part inside the same
    /// unit of work so no order ever lands with dangling lines.
    async fn insert_order(
        &self,
        order: NewOrder,
        lines: Vec<NewOrderLine>,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>>;

    async fn order_by_public_id(
        &self,
        public_id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>>;

    async fn lines_for_order(
        &self,
        order_id: i64,
    ) -> Result<Vec<OrderLine>, Box<dyn std::error::Error + Send + Sync>>;

    async fn set_total(
        &self,
        order_id: i64,
        total: Decimal,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn order_count(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}
