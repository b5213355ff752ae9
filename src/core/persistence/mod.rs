pub mod find_options;
