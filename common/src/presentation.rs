//! Presentación de órdenes en la pantalla del dueño.

use crate::constants::EMPTY_ORDERS_MESSAGE;
use crate::policy::OrderActions;
use crate::types::dtos::OrderDTO;
use crate::types::order_status::OrderStatus;
use colored::*;

/// Imagen asociada a cada estado de la orden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArtwork {
    TimerSand,
    ChefHat,
    TruckDelivery,
    Food,
}

impl StatusArtwork {
    pub fn for_status(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => StatusArtwork::TimerSand,
            OrderStatus::InProcess => StatusArtwork::ChefHat,
            OrderStatus::Sent => StatusArtwork::TruckDelivery,
            OrderStatus::Delivered => StatusArtwork::Food,
        }
    }

    pub fn asset(self) -> &'static str {
        match self {
            StatusArtwork::TimerSand => "timer-sand.jpg",
            StatusArtwork::ChefHat => "chef-hat.jpg",
            StatusArtwork::TruckDelivery => "truck-delivery.jpg",
            StatusArtwork::Food => "food.jpg",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            StatusArtwork::TimerSand => "⏳",
            StatusArtwork::ChefHat => "👨‍🍳",
            StatusArtwork::TruckDelivery => "🚚",
            StatusArtwork::Food => "🍽",
        }
    }
}

/// Tarjeta de una orden lista para mostrarse.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCard {
    pub order_id: u64,
    pub title: String,
    pub artwork: StatusArtwork,
    pub lines: Vec<String>,
    pub actions: OrderActions,
}

impl OrderCard {
    pub fn from_order(order: &OrderDTO, actions: OrderActions) -> Self {
        let mut lines = vec![
            format!("Fecha de creación {}", order.created_at.format("%Y-%m-%d %H:%M:%S")),
            format!("Total: {:.2} + {:.2}", order.price, order.shipping_costs),
            format!("Entrega en: {}", order.address),
        ];
        if let Some(user) = &order.user {
            lines.push(format!("Usuario: {} {}", user.first_name, user.last_name));
        }
        Self {
            order_id: order.id,
            title: order.status.to_string(),
            artwork: StatusArtwork::for_status(order.status),
            lines,
            actions,
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "{} {}\n",
            format!("#{} {}", self.order_id, self.artwork.glyph()).bold(),
            self.title.bold().bright_green()
        );
        for line in &self.lines {
            out.push_str(&format!("    {}\n", line));
        }
        let mut buttons = Vec::new();
        if self.actions.previous {
            buttons.push(format!("[p {}] Previous", self.order_id).bright_blue().to_string());
        }
        if self.actions.next {
            buttons.push(format!("[n {}] Next", self.order_id).bright_red().to_string());
        }
        if !buttons.is_empty() {
            out.push_str(&format!("    {}\n", buttons.join("  ")));
        }
        out
    }
}

pub fn render_cards(cards: &[OrderCard]) -> String {
    if cards.is_empty() {
        return format!("{}\n", EMPTY_ORDERS_MESSAGE);
    }
    cards.iter().map(OrderCard::render).collect::<Vec<_>>().join("\n")
}
