//! Llamadas al backend de DeliverUS para las órdenes de un restaurante.

pub mod endpoints;
pub mod http;
pub mod memory;

use async_trait::async_trait;
use common::types::dtos::OrderDTO;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Unexpected status {code}: {body}")]
    Status { code: u16, body: String },
}

impl ApiError {
    pub fn from_status(code: u16, body: String) -> Self {
        match code {
            404 => ApiError::NotFound(body),
            409 | 422 => ApiError::Conflict(body),
            _ => ApiError::Status { code, body },
        }
    }
}

/// Operaciones remotas sobre las órdenes. Cada llamada se confirma o falla entera.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Órdenes del restaurante.
    async fn get_all(&self, restaurant_id: u64) -> Result<Vec<OrderDTO>, ApiError>;

    /// Avanza la orden un estado.
    async fn forward_order(&self, order_id: u64) -> Result<OrderDTO, ApiError>;

    /// Vuelve la orden al estado anterior.
    async fn backward_order(&self, order_id: u64) -> Result<OrderDTO, ApiError>;
}
