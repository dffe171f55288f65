//! Política de transiciones de estado de una orden.
//!
//! Decide qué acciones puede ver el dueño ("Previous" / "Next") y calcula
//! el estado resultante de cada transición. No hace I/O: confirmar el cambio
//! contra el backend es responsabilidad de quien la usa.

use crate::constants::REVERT_WINDOW_MINUTES;
use crate::errors::{TransitionAction, TransitionError};
use crate::types::dtos::OrderDTO;
use crate::types::order_status::OrderStatus;
use chrono::{DateTime, Duration, Utc};

/// Acciones visibles para una orden en un instante dado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderActions {
    pub previous: bool,
    pub next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTransitionPolicy {
    /// Ventana durante la cual se puede volver al estado anterior.
    pub revert_window: Duration,
}

impl Default for OrderTransitionPolicy {
    fn default() -> Self {
        Self::new(Duration::minutes(REVERT_WINDOW_MINUTES))
    }
}

impl OrderTransitionPolicy {
    pub fn new(revert_window: Duration) -> Self {
        Self { revert_window }
    }

    /// Momento en que la orden entró a su estado actual.
    pub fn timestamp_for_current_status(order: &OrderDTO) -> Option<DateTime<Utc>> {
        match order.status {
            OrderStatus::Pending => None,
            OrderStatus::InProcess => order.started_at,
            OrderStatus::Sent => order.sent_at,
            OrderStatus::Delivered => order.delivered_at,
        }
    }

    pub fn can_advance(&self, order: &OrderDTO) -> bool {
        !order.status.is_terminal()
    }

    pub fn can_revert(&self, order: &OrderDTO, now: DateTime<Utc>) -> bool {
        self.check_revert(order, now).is_ok()
    }

    /// Igual que [`can_revert`](Self::can_revert) pero indica el motivo del rechazo.
    ///
    /// El tiempo transcurrido se toma en valor absoluto, así que una marca
    /// levemente en el futuro (reloj del cliente atrasado) también cuenta
    /// como dentro de la ventana.
    pub fn check_revert(&self, order: &OrderDTO, now: DateTime<Utc>) -> Result<(), TransitionError> {
        let invalid = TransitionError::InvalidTransition {
            order_id: order.id,
            from: order.status,
            action: TransitionAction::Revert,
        };
        if order.status == OrderStatus::Pending {
            return Err(invalid);
        }
        let entered_at = Self::timestamp_for_current_status(order).ok_or(
            TransitionError::InconsistentTimestamp {
                order_id: order.id,
                status: order.status,
            },
        )?;
        let elapsed = (now - entered_at).abs();
        if elapsed <= self.revert_window {
            Ok(())
        } else {
            Err(invalid)
        }
    }

    pub fn available_actions(&self, order: &OrderDTO, now: DateTime<Utc>) -> OrderActions {
        OrderActions {
            previous: self.can_revert(order, now),
            next: self.can_advance(order),
        }
    }

    /// Calcula la orden tras avanzar un paso, con la marca del nuevo estado en `now`.
    pub fn advance(&self, order: &OrderDTO, now: DateTime<Utc>) -> Result<OrderDTO, TransitionError> {
        let next = order
            .status
            .next()
            .ok_or(TransitionError::InvalidTransition {
                order_id: order.id,
                from: order.status,
                action: TransitionAction::Advance,
            })?;
        let mut advanced = order.clone();
        advanced.status = next;
        match next {
            OrderStatus::Pending => {}
            OrderStatus::InProcess => advanced.started_at = Some(now),
            OrderStatus::Sent => advanced.sent_at = Some(now),
            OrderStatus::Delivered => advanced.delivered_at = Some(now),
        }
        Ok(advanced)
    }

    /// Calcula la orden tras volver un paso atrás. Borra la marca del estado que se abandona.
    pub fn revert(&self, order: &OrderDTO, now: DateTime<Utc>) -> Result<OrderDTO, TransitionError> {
        self.check_revert(order, now)?;
        let previous = order
            .status
            .previous()
            .ok_or(TransitionError::InvalidTransition {
                order_id: order.id,
                from: order.status,
                action: TransitionAction::Revert,
            })?;
        let mut reverted = order.clone();
        match order.status {
            OrderStatus::Pending => {}
            OrderStatus::InProcess => reverted.started_at = None,
            OrderStatus::Sent => reverted.sent_at = None,
            OrderStatus::Delivered => reverted.delivered_at = None,
        }
        reverted.status = previous;
        Ok(reverted)
    }
}
