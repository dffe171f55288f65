pub mod dtos;
pub mod order_status;
