use crate::errors::OwnerError;
use actix::Message;
use common::presentation::OrderCard;
use common::types::dtos::OrderDTO;

/// Pide al tablero que vuelva a traer las órdenes del backend.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<Vec<OrderDTO>, OwnerError>")]
pub struct FetchOrders;

/// Botón "Next": avanza la orden y recarga la lista.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<Vec<OrderDTO>, OwnerError>")]
pub struct ForwardOrder {
    pub order_id: u64,
}

/// Botón "Previous": vuelve la orden al estado anterior y recarga la lista.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<Vec<OrderDTO>, OwnerError>")]
pub struct BackwardOrder {
    pub order_id: u64,
}

/// Tarjetas de las órdenes en caché, con las acciones evaluadas ahora.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Vec<OrderCard>")]
pub struct GetOrderCards;

/// Comando ya interpretado que el `UIHandler` debe ejecutar.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
#[rtype(result = "()")]
pub struct RunCommand {
    pub command: crate::restaurant_actors::ui_handler::Command,
}
