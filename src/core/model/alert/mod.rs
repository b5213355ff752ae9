pub mod alert;
pub mod alert_limits;
pub mod alert_severity;
