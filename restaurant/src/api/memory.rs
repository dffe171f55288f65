//! Backend en memoria: aplica la misma política que el servidor real.
//! Se usa en los tests y en el modo `--offline`.

use crate::api::{ApiError, OrderApi};
use async_trait::async_trait;
use chrono::Duration;
use common::clock::Clock;
use common::policy::OrderTransitionPolicy;
use common::types::dtos::{CustomerDTO, OrderDTO};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

struct StoredOrder {
    restaurant_id: u64,
    order: OrderDTO,
}

pub struct InMemoryOrderApi {
    orders: RwLock<BTreeMap<u64, StoredOrder>>,
    policy: OrderTransitionPolicy,
    clock: Arc<dyn Clock>,
    commits: AtomicUsize,
}

impl InMemoryOrderApi {
    pub fn new(policy: OrderTransitionPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            orders: RwLock::new(BTreeMap::new()),
            policy,
            clock,
            commits: AtomicUsize::new(0),
        }
    }

    /// Restaurante con un par de órdenes pendientes para probar la pantalla sin backend.
    pub async fn with_demo_orders(
        restaurant_id: u64,
        policy: OrderTransitionPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let api = Self::new(policy, clock.clone());
        let now = clock.now();
        let customers = [("Ana", "Pérez", "Calle Sierpes 12"), ("Luis", "Gómez", "Av. de la Constitución 3")];
        for (i, (first_name, last_name, address)) in customers.iter().enumerate() {
            let id = i as u64 + 1;
            let mut order = OrderDTO::new(id, now - Duration::minutes(20 * id as i64));
            order.price = 10.0 * id as f64;
            order.shipping_costs = 2.5;
            order.address = address.to_string();
            order.user = Some(CustomerDTO {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            });
            api.insert(restaurant_id, order).await;
        }
        api
    }

    pub async fn insert(&self, restaurant_id: u64, order: OrderDTO) {
        let mut orders = self.orders.write().await;
        orders.insert(
            order.id,
            StoredOrder {
                restaurant_id,
                order,
            },
        );
    }

    pub async fn get(&self, order_id: u64) -> Option<OrderDTO> {
        self.orders.read().await.get(&order_id).map(|s| s.order.clone())
    }

    /// Cantidad de transiciones confirmadas.
    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    async fn transition<F>(&self, order_id: u64, apply: F) -> Result<OrderDTO, ApiError>
    where
        F: FnOnce(&OrderTransitionPolicy, &OrderDTO) -> Result<OrderDTO, common::errors::TransitionError>,
    {
        let mut orders = self.orders.write().await;
        let stored = orders
            .get_mut(&order_id)
            .ok_or_else(|| ApiError::NotFound(format!("order {}", order_id)))?;
        let updated = apply(&self.policy, &stored.order).map_err(|e| ApiError::Conflict(e.to_string()))?;
        stored.order = updated.clone();
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(updated)
    }
}

#[async_trait]
impl OrderApi for InMemoryOrderApi {
    async fn get_all(&self, restaurant_id: u64) -> Result<Vec<OrderDTO>, ApiError> {
        let orders = self.orders.read().await;
        Ok(orders
            .values()
            .filter(|s| s.restaurant_id == restaurant_id)
            .map(|s| s.order.clone())
            .collect())
    }

    async fn forward_order(&self, order_id: u64) -> Result<OrderDTO, ApiError> {
        let now = self.clock.now();
        self.transition(order_id, |policy, order| policy.advance(order, now))
            .await
    }

    async fn backward_order(&self, order_id: u64) -> Result<OrderDTO, ApiError> {
        let now = self.clock.now();
        self.transition(order_id, |policy, order| policy.revert(order, now))
            .await
    }
}
