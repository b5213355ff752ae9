pub mod move_mapping;
