pub mod board_handler;
pub mod default_handler;
