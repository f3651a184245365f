use std::collections::HashMap;

use async_trait::async_trait;
use gearbox_catalog::{Car, CatalogRepository, Part, PartFilter};
use gearbox_core::round_money;
use gearbox_order::{NewOrder, NewOrderLine, Order, OrderLine, OrderRepository};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct StoreState {
    cars: HashMap<i64, Car>,
    parts: HashMap<i64, Part>,
    orders: HashMap<i64, Order>,
    lines: HashMap<i64, OrderLine>,
    next_car_id: i64,
    next_part_id: i64,
    next_order_id: i64,
    next_line_id: i64,
}

/// In-memory backing store for both repositories.
///
/// One writer lock guards all tables, so every mutating operation is a
/// single atomic unit: an order insert re-checks its part ids and writes
/// the order with all of its lines under the same lock acquisition, and
/// readers never observe a partial order. A SQL-backed store would slot in
/// behind the same repository traits.
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for MemoryStore {
    async fn insert_car(
        &self,
        model: &str,
        year: i32,
    ) -> Result<Car, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.write().await;
        state.next_car_id += 1;
        let car = Car {
            id: state.next_car_id,
            model: model.to_string(),
            year,
        };
        state.cars.insert(car.id, car.clone());
        Ok(car)
    }

    async fn insert_part(
        &self,
        name: &str,
        price: Decimal,
        owner: Option<i64>,
    ) -> Result<Part, Box<dyn std::error::Error + Send + Sync>> {
        if price < Decimal::ZERO {
            return Err(format!("part price must not be negative, got {}", price).into());
        }
        let mut state = self.state.write().await;
        if let Some(car_id) = owner {
            if !state.cars.contains_key(&car_id) {
                return Err(format!("owner car {} does not exist", car_id).into());
            }
        }
        state.next_part_id += 1;
        let part = Part {
            id: state.next_part_id,
            name: name.to_string(),
            price: round_money(price),
            owner,
        };
        state.parts.insert(part.id, part.clone());
        Ok(part)
    }

    async fn car_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Car>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.read().await;
        Ok(state.cars.get(&id).cloned())
    }

    async fn part_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Part>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.read().await;
        Ok(state.parts.get(&id).cloned())
    }

    async fn list_cars(&self) -> Result<Vec<Car>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.read().await;
        let mut cars: Vec<Car> = state.cars.values().cloned().collect();
        cars.sort_by_key(|car| car.id);
        Ok(cars)
    }

    async fn parts_for_car(
        &self,
        car_id: i64,
    ) -> Result<Vec<Part>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.read().await;
        let mut parts: Vec<Part> = state
            .parts
            .values()
            .filter(|part| part.owner == Some(car_id))
            .cloned()
            .collect();
        parts.sort_by_key(|part| part.id);
        Ok(parts)
    }

    async fn list_parts(
        &self,
        filter: &PartFilter,
    ) -> Result<Vec<Part>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.read().await;
        let mut parts: Vec<Part> = state
            .parts
            .values()
            .filter(|part| filter.matches(part))
            .cloned()
            .collect();
        parts.sort_by_key(|part| part.id);
        Ok(parts)
    }

    async fn delete_part(
        &self,
        id: i64,
    ) -> Result<Vec<Uuid>, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.write().await;
        if state.parts.remove(&id).is_none() {
            return Err(format!("part {} does not exist", id).into());
        }

        let mut affected: Vec<i64> = Vec::new();
        state.lines.retain(|_, line| {
            if line.part_id == id {
                affected.push(line.order_id);
                false
            } else {
                true
            }
        });
        affected.sort_unstable();
        affected.dedup();

        Ok(affected
            .iter()
            .filter_map(|order_id| state.orders.get(order_id).map(|order| order.public_id))
            .collect())
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn insert_order(
        &self,
        order: NewOrder,
        lines: Vec<NewOrderLine>,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.write().await;

        // verify every part before writing any row
        for line in &lines {
            if !state.parts.contains_key(&line.part_id) {
                return Err(format!("part {} does not exist", line.part_id).into());
            }
        }

        state.next_order_id += 1;
        let order = Order {
            id: state.next_order_id,
            public_id: order.public_id,
            total: order.total,
            created_at: order.created_at,
        };
        state.orders.insert(order.id, order.clone());

        for line in lines {
            state.next_line_id += 1;
            let line = OrderLine {
                id: state.next_line_id,
                order_id: order.id,
                part_id: line.part_id,
                quantity: line.quantity,
            };
            state.lines.insert(line.id, line);
        }

        Ok(order)
    }

    async fn order_by_public_id(
        &self,
        public_id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.read().await;
        Ok(state
            .orders
            .values()
            .find(|order| order.public_id == public_id)
            .cloned())
    }

    async fn lines_for_order(
        &self,
        order_id: i64,
    ) -> Result<Vec<OrderLine>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.read().await;
        let mut lines: Vec<OrderLine> = state
            .lines
            .values()
            .filter(|line| line.order_id == order_id)
            .cloned()
            .collect();
        lines.sort_by_key(|line| line.id);
        Ok(lines)
    }

    async fn set_total(
        &self,
        order_id: i64,
        total: Decimal,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.write().await;
        match state.orders.get_mut(&order_id) {
            Some(order) => {
                order.total = total;
                Ok(())
            }
            None => Err(format!("order {} does not exist", order_id).into()),
        }
    }

    async fn order_count(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.read().await;
        Ok(state.orders.len() as u64)
    }
}
