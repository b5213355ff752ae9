pub mod alert;
pub mod move_mapping;
pub mod webhook;
