pub mod orders_board;
pub mod ui_handler;
