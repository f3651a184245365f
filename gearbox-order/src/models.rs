use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A placed order. `total` caches the grand total charged at placement,
/// shipping included; it is re-derived from the lines whenever they change
/// and is never accepted from a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub public_id: Uuid,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Quantity of one part within one order. The line subtotal is always
/// derived from the live part price, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub part_id: i64,
    pub quantity: i64,
}

/// Field set for inserting an order row.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub public_id: Uuid,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Field set for inserting one order line.
#[derive(Debug, Clone)]
pub struct NewOrderLine {
    pub part_id: i64,
    pub quantity: i64,
}

/// One validated `{partId, quantity}` pair from an order payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LineInput {
    pub part_id: i64,
    pub quantity: i64,
}

/// Quote produced by price calculation. Nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub free_shipping_applied: bool,
    pub per_line_breakdown: Vec<LineBreakdown>,
}

/// Per-line detail inside a quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBreakdown {
    pub part_id: i64,
    pub part_name: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Report view over an order and its current lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReport {
    pub order_id: Uuid,
    pub created_at: String,
    pub lines: Vec<ReportLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// One line of an order report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub part_name: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Payload returned after a successful order placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub order_id: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub report: OrderReport,
}

/// A pre-allocated order identifier. Nothing is reserved or persisted;
/// order placement always mints its own id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOrderId {
    pub order_id: Uuid,
    pub generated_at: DateTime<Utc>,
}
