pub mod alert_clean_service;
pub mod alert_ingest_service;
pub mod alert_validate_service;
pub mod escalation_validate_service;
pub mod webhook_validate_service;
