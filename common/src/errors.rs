use crate::types::order_status::OrderStatus;
use std::fmt;
use thiserror::Error;

/// Acción que el dueño puede pedir sobre una orden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    Advance,
    Revert,
}

impl fmt::Display for TransitionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionAction::Advance => write!(f, "advance"),
            TransitionAction::Revert => write!(f, "revert"),
        }
    }
}

/// Errores de la política de transiciones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Cannot {action} order {order_id} from status '{from}'")]
    InvalidTransition {
        order_id: u64,
        from: OrderStatus,
        action: TransitionAction,
    },
    #[error("Order {order_id} is '{status}' but has no timestamp for that status")]
    InconsistentTimestamp { order_id: u64, status: OrderStatus },
}
