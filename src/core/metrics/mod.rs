pub mod metrics_trait;
pub mod noop_metrics;
