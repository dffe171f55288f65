use crate::types::order_status::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cliente que realizó el pedido, tal como lo devuelve el backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDTO {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDTO {
    /// ID de la orden.
    pub id: u64,
    /// Estado de la orden.
    pub status: OrderStatus,
    /// Momento de creación, no cambia nunca.
    pub created_at: DateTime<Utc>,
    /// Momento en que la orden pasó a `in process`.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// Momento en que la orden pasó a `sent`.
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
    /// Momento en que la orden pasó a `delivered`.
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    /// Precio de los productos.
    #[serde(default)]
    pub price: f64,
    /// Costo de envío.
    #[serde(default)]
    pub shipping_costs: f64,
    /// Dirección de entrega.
    #[serde(default)]
    pub address: String,
    /// Cliente asociado a la orden.
    #[serde(default)]
    pub user: Option<CustomerDTO>,
}

impl OrderDTO {
    /// Orden recién creada, en estado `pending`.
    pub fn new(id: u64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            status: OrderStatus::Pending,
            created_at,
            started_at: None,
            sent_at: None,
            delivered_at: None,
            price: 0.0,
            shipping_costs: 0.0,
            address: String::new(),
            user: None,
        }
    }

    pub fn total(&self) -> f64 {
        self.price + self.shipping_costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_order() {
        let json = r#"{
            "id": 7,
            "status": "sent",
            "createdAt": "2024-03-01T12:00:00Z",
            "startedAt": "2024-03-01T12:05:00Z",
            "sentAt": "2024-03-01T12:30:00Z",
            "price": 12.5,
            "shippingCosts": 1.5,
            "address": "Calle Falsa 123",
            "user": { "firstName": "Ana", "lastName": "Pérez" }
        }"#;
        let order: OrderDTO = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.status, OrderStatus::Sent);
        assert!(order.started_at.is_some());
        assert!(order.sent_at.is_some());
        assert_eq!(order.delivered_at, None);
        assert_eq!(order.total(), 14.0);
        assert_eq!(order.user.unwrap().first_name, "Ana");
    }

    #[test]
    fn missing_optionals_default() {
        let json = r#"{"id": 1, "status": "pending", "createdAt": "2024-03-01T12:00:00Z"}"#;
        let order: OrderDTO = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.started_at, None);
        assert!(order.user.is_none());
        assert!(order.address.is_empty());
    }
}
