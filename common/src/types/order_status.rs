use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado de un pedido visto desde el dueño del restaurante.
///
/// Los estados forman una secuencia lineal y totalmente ordenada:
/// `Pending < InProcess < Sent < Delivered`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderStatus {
    #[serde(rename = "pending")]
    Pending, // El pedido llegó y todavía no se empezó a preparar
    #[serde(rename = "in process", alias = "in_process")]
    InProcess, // El restaurante está preparando el pedido
    #[serde(rename = "sent")]
    Sent, // El pedido salió con el repartidor
    #[serde(rename = "delivered")]
    Delivered, // El pedido fue entregado al cliente
}

impl OrderStatus {
    /// Estado siguiente en la secuencia, `None` si el estado es terminal.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::InProcess),
            OrderStatus::InProcess => Some(OrderStatus::Sent),
            OrderStatus::Sent => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    /// Estado anterior en la secuencia, `None` para el estado inicial.
    pub fn previous(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => None,
            OrderStatus::InProcess => Some(OrderStatus::Pending),
            OrderStatus::Sent => Some(OrderStatus::InProcess),
            OrderStatus::Delivered => Some(OrderStatus::Sent),
        }
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::InProcess => write!(f, "in process"),
            OrderStatus::Sent => write!(f, "sent"),
            OrderStatus::Delivered => write!(f, "delivered"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_linear() {
        let mut status = OrderStatus::Pending;
        let mut visited = vec![status];
        while let Some(next) = status.next() {
            assert!(next > status);
            assert_eq!(next.previous(), Some(status));
            status = next;
            visited.push(status);
        }
        assert_eq!(visited.len(), 4);
        assert!(status.is_terminal());
        assert_eq!(OrderStatus::Pending.previous(), None);
    }

    #[test]
    fn wire_names_match_backend() {
        let json = serde_json::to_string(&OrderStatus::InProcess).unwrap();
        assert_eq!(json, "\"in process\"");
        let parsed: OrderStatus = serde_json::from_str("\"in_process\"").unwrap();
        assert_eq!(parsed, OrderStatus::InProcess);
        let parsed: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(parsed, OrderStatus::Delivered);
        assert_eq!(OrderStatus::Sent.to_string(), "sent");
    }
}
