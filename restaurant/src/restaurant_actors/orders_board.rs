use crate::api::OrderApi;
use crate::errors::OwnerError;
use crate::messages::{BackwardOrder, FetchOrders, ForwardOrder, GetOrderCards};
use actix::prelude::*;
use colored::Color;
use common::clock::Clock;
use common::errors::{TransitionAction, TransitionError};
use common::logger::Logger;
use common::policy::OrderTransitionPolicy;
use common::presentation::OrderCard;
use common::types::dtos::OrderDTO;
use std::sync::Arc;

/// Tablero de órdenes de un restaurante.
///
/// Guarda la última lista traída del backend, consulta la política antes de
/// cada acción y, si la acción se confirma, vuelve a traer la lista.
pub struct OrdersBoard {
    /// Restaurante del que se muestran las órdenes.
    pub restaurant_id: u64,
    /// Última lista de órdenes recibida.
    pub orders: Vec<OrderDTO>,
    pub policy: OrderTransitionPolicy,
    pub api: Arc<dyn OrderApi>,
    pub clock: Arc<dyn Clock>,
    pub logger: Logger,
}

impl OrdersBoard {
    pub fn new(
        restaurant_id: u64,
        api: Arc<dyn OrderApi>,
        policy: OrderTransitionPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            restaurant_id,
            orders: Vec::new(),
            policy,
            api,
            clock,
            logger: Logger::new("OrdersBoard", Color::BrightGreen),
        }
    }

    fn find(&self, order_id: u64) -> Result<&OrderDTO, OwnerError> {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or(OwnerError::OrderNotFound(order_id))
    }

    fn store_orders(
        &mut self,
        result: Result<Vec<OrderDTO>, OwnerError>,
    ) -> Result<Vec<OrderDTO>, OwnerError> {
        match &result {
            Ok(orders) => {
                self.logger.info(format!(
                    "Restaurant {} has {} orders",
                    self.restaurant_id,
                    orders.len()
                ));
                self.orders = orders.clone();
            }
            Err(e) => self.logger.error(format!("Could not refresh orders: {}", e)),
        }
        result
    }
}

impl Actor for OrdersBoard {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger
            .info(format!("Board started for restaurant {}", self.restaurant_id));
    }
}

impl Handler<FetchOrders> for OrdersBoard {
    type Result = ResponseActFuture<Self, Result<Vec<OrderDTO>, OwnerError>>;

    fn handle(&mut self, _msg: FetchOrders, _ctx: &mut Self::Context) -> Self::Result {
        let api = self.api.clone();
        let restaurant_id = self.restaurant_id;
        let fut = async move { api.get_all(restaurant_id).await.map_err(OwnerError::from) };
        Box::pin(
            fut.into_actor(self)
                .map(|result, actor, _ctx| actor.store_orders(result)),
        )
    }
}

impl Handler<ForwardOrder> for OrdersBoard {
    type Result = AtomicResponse<Self, Result<Vec<OrderDTO>, OwnerError>>;

    fn handle(&mut self, msg: ForwardOrder, _ctx: &mut Self::Context) -> Self::Result {
        let allowed = self.find(msg.order_id).and_then(|order| {
            if self.policy.can_advance(order) {
                Ok(())
            } else {
                Err(OwnerError::from(TransitionError::InvalidTransition {
                    order_id: order.id,
                    from: order.status,
                    action: TransitionAction::Advance,
                }))
            }
        });
        if let Err(e) = allowed {
            self.logger
                .warn(format!("Forward of order {} rejected: {}", msg.order_id, e));
            return AtomicResponse::new(Box::pin(actix::fut::ready(Err(e))));
        }

        self.logger.info(format!("Forwarding order {}", msg.order_id));
        let api = self.api.clone();
        let restaurant_id = self.restaurant_id;
        let fut = async move {
            api.forward_order(msg.order_id).await?;
            let orders = api.get_all(restaurant_id).await?;
            Ok::<_, OwnerError>(orders)
        };
        AtomicResponse::new(Box::pin(
            fut.into_actor(self)
                .map(|result, actor, _ctx| actor.store_orders(result)),
        ))
    }
}

impl Handler<BackwardOrder> for OrdersBoard {
    type Result = AtomicResponse<Self, Result<Vec<OrderDTO>, OwnerError>>;

    fn handle(&mut self, msg: BackwardOrder, _ctx: &mut Self::Context) -> Self::Result {
        let now = self.clock.now();
        let allowed = self
            .find(msg.order_id)
            .and_then(|order| self.policy.check_revert(order, now).map_err(OwnerError::from));
        if let Err(e) = allowed {
            self.logger
                .warn(format!("Backward of order {} rejected: {}", msg.order_id, e));
            return AtomicResponse::new(Box::pin(actix::fut::ready(Err(e))));
        }

        self.logger.info(format!("Reverting order {}", msg.order_id));
        let api = self.api.clone();
        let restaurant_id = self.restaurant_id;
        let fut = async move {
            api.backward_order(msg.order_id).await?;
            let orders = api.get_all(restaurant_id).await?;
            Ok::<_, OwnerError>(orders)
        };
        AtomicResponse::new(Box::pin(
            fut.into_actor(self)
                .map(|result, actor, _ctx| actor.store_orders(result)),
        ))
    }
}

impl Handler<GetOrderCards> for OrdersBoard {
    type Result = MessageResult<GetOrderCards>;

    fn handle(&mut self, _msg: GetOrderCards, _ctx: &mut Self::Context) -> Self::Result {
        let now = self.clock.now();
        MessageResult(
            self.orders
                .iter()
                .map(|order| OrderCard::from_order(order, self.policy.available_actions(order, now)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::InMemoryOrderApi;
    use crate::api::ApiError;
    use chrono::{Duration, TimeZone, Utc};
    use common::clock::ManualClock;
    use common::types::order_status::OrderStatus;

    async fn setup() -> (Addr<OrdersBoard>, Arc<InMemoryOrderApi>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap(),
        ));
        let policy = OrderTransitionPolicy::default();
        let api = Arc::new(InMemoryOrderApi::new(policy, clock.clone()));
        api.insert(1, OrderDTO::new(10, clock.now())).await;
        api.insert(1, OrderDTO::new(11, clock.now())).await;
        api.insert(2, OrderDTO::new(20, clock.now())).await;
        let board = OrdersBoard::new(1, api.clone(), policy, clock.clone()).start();
        (board, api, clock)
    }

    #[actix_rt::test]
    async fn fetch_caches_restaurant_orders() {
        let (board, _api, _clock) = setup().await;
        let orders = board.send(FetchOrders).await.unwrap().unwrap();
        assert_eq!(orders.iter().map(|o| o.id).collect::<Vec<_>>(), vec![10, 11]);
        let cards = board.send(GetOrderCards).await.unwrap();
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.actions.next && !c.actions.previous));
    }

    #[actix_rt::test]
    async fn forward_commits_and_refetches() {
        let (board, api, clock) = setup().await;
        board.send(FetchOrders).await.unwrap().unwrap();
        let orders = board
            .send(ForwardOrder { order_id: 10 })
            .await
            .unwrap()
            .unwrap();
        let order = orders.iter().find(|o| o.id == 10).unwrap();
        assert_eq!(order.status, OrderStatus::InProcess);
        assert_eq!(order.started_at, Some(clock.now()));
        assert_eq!(api.commits(), 1);

        let cards = board.send(GetOrderCards).await.unwrap();
        let card = cards.iter().find(|c| c.order_id == 10).unwrap();
        assert!(card.actions.previous && card.actions.next);
    }

    #[actix_rt::test]
    async fn backward_inside_window_reverts() {
        let (board, api, clock) = setup().await;
        board.send(FetchOrders).await.unwrap().unwrap();
        board.send(ForwardOrder { order_id: 11 }).await.unwrap().unwrap();
        clock.advance(Duration::minutes(3));
        let orders = board
            .send(BackwardOrder { order_id: 11 })
            .await
            .unwrap()
            .unwrap();
        let order = orders.iter().find(|o| o.id == 11).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.started_at, None);
        assert_eq!(api.commits(), 2);
    }

    #[actix_rt::test]
    async fn backward_after_window_never_reaches_backend() {
        let (board, api, clock) = setup().await;
        board.send(FetchOrders).await.unwrap().unwrap();
        board.send(ForwardOrder { order_id: 10 }).await.unwrap().unwrap();
        clock.advance(Duration::minutes(10));
        let result = board.send(BackwardOrder { order_id: 10 }).await.unwrap();
        assert!(matches!(
            result,
            Err(OwnerError::Transition(TransitionError::InvalidTransition { .. }))
        ));
        assert_eq!(api.commits(), 1);
    }

    #[actix_rt::test]
    async fn pending_cannot_go_backward() {
        let (board, api, _clock) = setup().await;
        board.send(FetchOrders).await.unwrap().unwrap();
        let result = board.send(BackwardOrder { order_id: 10 }).await.unwrap();
        assert!(matches!(result, Err(OwnerError::Transition(_))));
        assert_eq!(api.commits(), 0);
    }

    #[actix_rt::test]
    async fn delivered_cannot_go_forward() {
        let (board, api, _clock) = setup().await;
        board.send(FetchOrders).await.unwrap().unwrap();
        for _ in 0..3 {
            board.send(ForwardOrder { order_id: 10 }).await.unwrap().unwrap();
        }
        let result = board.send(ForwardOrder { order_id: 10 }).await.unwrap();
        assert!(matches!(result, Err(OwnerError::Transition(_))));
        assert_eq!(api.commits(), 3);
        assert_eq!(api.get(10).await.unwrap().status, OrderStatus::Delivered);
    }

    #[actix_rt::test]
    async fn unknown_and_foreign_orders_are_rejected() {
        let (board, _api, _clock) = setup().await;
        board.send(FetchOrders).await.unwrap().unwrap();
        let result = board.send(ForwardOrder { order_id: 20 }).await.unwrap();
        assert!(matches!(result, Err(OwnerError::OrderNotFound(20))));
    }

    #[actix_rt::test]
    async fn stale_cache_surfaces_backend_conflict() {
        let (board, api, _clock) = setup().await;
        board.send(FetchOrders).await.unwrap().unwrap();
        // otro dispositivo entrega la orden mientras este tablero no se refrescó
        for _ in 0..3 {
            api.forward_order(10).await.unwrap();
        }
        let result = board.send(ForwardOrder { order_id: 10 }).await.unwrap();
        assert!(matches!(result, Err(OwnerError::Api(ApiError::Conflict(_)))));
    }
}
