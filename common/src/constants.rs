/// Minutos durante los cuales el dueño puede volver al estado anterior.
pub const REVERT_WINDOW_MINUTES: i64 = 5;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const API_URL_ENV: &str = "DELIVERUS_API_URL";
pub const API_TOKEN_ENV: &str = "DELIVERUS_API_TOKEN";
pub const REVERT_WINDOW_ENV: &str = "DELIVERUS_REVERT_WINDOW_MINUTES";
pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;

pub const EMPTY_ORDERS_MESSAGE: &str = "There are no orders for this restaurant";
