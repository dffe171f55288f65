/// Rutas relativas de la API de órdenes.
pub fn restaurant_orders(restaurant_id: u64) -> String {
    format!("/restaurants/{}/orders", restaurant_id)
}

pub fn forward(order_id: u64) -> String {
    format!("/orders/{}/forward", order_id)
}

pub fn backward(order_id: u64) -> String {
    format!("/orders/{}/backward", order_id)
}

/// Une la URL base con una ruta sin duplicar la barra.
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
