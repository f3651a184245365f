pub mod models;
pub mod pricing;
pub mod validate;
pub mod report;
pub mod repository;
pub mod service;

use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("{0}")]
    Validation(String),
    #[error("Part not found: {0}")]
    PartNotFound(i64),
    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),
    #[error("Order storage failed: {0}")]
    Storage(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

pub use models::{
    GeneratedOrderId, LineBreakdown, LineInput, NewOrder, NewOrderLine, Order, OrderCreated,
    OrderLine, OrderReport, PriceQuote, ReportLine,
};
pub use pricing::PricingRules;
pub use report::build_report;
pub use repository::OrderRepository;
pub use service::OrderService;
pub use validate::validate_order_input;
