use std::sync::Arc;

use chrono::Utc;
use gearbox_catalog::{CatalogError, CatalogService};
use gearbox_core::round_money;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::models::{
    GeneratedOrderId, LineBreakdown, LineInput, NewOrder, NewOrderLine, Order, OrderCreated,
    OrderReport, PriceQuote,
};
use crate::pricing::PricingRules;
use crate::report::build_report;
use crate::repository::OrderRepository;
use crate::validate::validate_order_input;
use crate::{OrderError, OrderResult};

fn map_catalog_err(err: CatalogError) -> OrderError {
    match err {
        CatalogError::PartNotFound(id) => OrderError::PartNotFound(id),
        other => OrderError::Storage(other.to_string()),
    }
}

/// Pricing and order placement over the catalog and the order store.
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
    catalog: Arc<CatalogService>,
    rules: PricingRules,
}

impl OrderService {
    pub fn new(
        repo: Arc<dyn OrderRepository>,
        catalog: Arc<CatalogService>,
        rules: PricingRules,
    ) -> Self {
        Self {
            repo,
            catalog,
            rules,
        }
    }

    /// Price a line list without persisting anything.
    ///
    /// Every part id must resolve; one unknown part fails the whole quote.
    pub async fn calculate_price(&self, lines: &[LineInput]) -> OrderResult<PriceQuote> {
        if lines.is_empty() {
            return Err(OrderError::Validation("lines required".to_string()));
        }

        let mut subtotal = Decimal::ZERO;
        let mut breakdown = Vec::with_capacity(lines.len());

        for line in lines {
            if line.quantity <= 0 {
                return Err(OrderError::Validation(
                    "quantity must be greater than 0".to_string(),
                ));
            }

            let part = self
                .catalog
                .get_part(line.part_id)
                .await
                .map_err(map_catalog_err)?;
            let line_subtotal = part.price * Decimal::from(line.quantity);
            subtotal += line_subtotal;

            breakdown.push(LineBreakdown {
                part_id: part.id,
                part_name: part.name,
                quantity: line.quantity,
                unit_price: part.price,
                subtotal: line_subtotal,
            });
        }

        let subtotal = round_money(subtotal);
        let shipping = round_money(self.rules.shipping_for(subtotal));

        Ok(PriceQuote {
            subtotal,
            shipping,
            total: round_money(subtotal + shipping),
            free_shipping_applied: self.rules.qualifies_free_shipping(subtotal),
            per_line_breakdown: breakdown,
        })
    }

    /// Validate a raw order payload, price it, and persist the order with
    /// its lines as one unit of work. Nothing is stored on any failure.
    pub async fn create_order(&self, payload: &Value) -> OrderResult<OrderCreated> {
        let lines = validate_order_input(payload)?;
        let quote = self.calculate_price(&lines).await?;

        let new_lines = lines
            .iter()
            .map(|line| NewOrderLine {
                part_id: line.part_id,
                quantity: line.quantity,
            })
            .collect();
        let order = self
            .repo
            .insert_order(
                NewOrder {
                    public_id: Uuid::new_v4(),
                    total: quote.total,
                    created_at: Utc::now(),
                },
                new_lines,
            )
            .await
            .map_err(|e| OrderError::Storage(e.to_string()))?;

        let report = self.report_for(&order).await?;

        Ok(OrderCreated {
            order_id: order.public_id,
            total: order.total,
            created_at: order.created_at,
            report,
        })
    }

    /// Report for an existing order, addressed by its public id.
    pub async fn get_order_report(&self, public_id: Uuid) -> OrderResult<OrderReport> {
        let order = self.order_by_public_id(public_id).await?;
        self.report_for(&order).await
    }

    /// Re-derive an order's total from its current lines and persist it.
    /// Safe to repeat: the same line set always settles on the same total.
    ///
    /// Orders whose lines were all removed by part deletions drop to zero
    /// rather than keeping a shipping fee with nothing left to ship.
    pub async fn recompute_total(&self, public_id: Uuid) -> OrderResult<Decimal> {
        let order = self.order_by_public_id(public_id).await?;
        let lines = self
            .repo
            .lines_for_order(order.id)
            .await
            .map_err(|e| OrderError::Storage(e.to_string()))?;

        let mut subtotal = Decimal::ZERO;
        for line in &lines {
            let part = self
                .catalog
                .get_part(line.part_id)
                .await
                .map_err(map_catalog_err)?;
            subtotal += part.price * Decimal::from(line.quantity);
        }

        let total = if lines.is_empty() {
            Decimal::ZERO
        } else {
            let subtotal = round_money(subtotal);
            round_money(subtotal + self.rules.shipping_for(subtotal))
        };

        self.repo
            .set_total(order.id, total)
            .await
            .map_err(|e| OrderError::Storage(e.to_string()))?;

        Ok(total)
    }

    /// Mint a fresh order identifier. Pure utility for clients that want
    /// to pre-allocate an id; nothing is reserved.
    pub fn generate_order_id(&self) -> GeneratedOrderId {
        GeneratedOrderId {
            order_id: Uuid::new_v4(),
            generated_at: Utc::now(),
        }
    }

    async fn order_by_public_id(&self, public_id: Uuid) -> OrderResult<Order> {
        self.repo
            .order_by_public_id(public_id)
            .await
            .map_err(|e| OrderError::Storage(e.to_string()))?
            .ok_or(OrderError::OrderNotFound(public_id))
    }

    async fn report_for(&self, order: &Order) -> OrderResult<OrderReport> {
        let lines = self
            .repo
            .lines_for_order(order.id)
            .await
            .map_err(|e| OrderError::Storage(e.to_string()))?;

        let mut resolved = Vec::with_capacity(lines.len());
        for line in lines {
            let part = self
                .catalog
                .get_part(line.part_id)
                .await
                .map_err(map_catalog_err)?;
            resolved.push((line, part));
        }

        Ok(build_report(order, &resolved))
    }
}
