//! HTTP controllers: connect routes to domain services

pub mod alert;
