use super::metrics_trait::Metrics;

/// Metrics implementation that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl Metrics for NoopMetrics {
    fn register_counter(&self, _name: &str, _help: &str, _labels: &[&str]) {}

    fn register_gauge(&self, _name: &str, _help: &str, _labels: &[&str]) {}

    fn register_histogram(&self, _name: &str, _help: &str, _buckets: &[f64], _labels: &[&str]) {}

    fn add(&self, _name: &str, _value: f64, _label_values: &[&str]) {}

    fn set(&self, _name: &str, _value: f64, _label_values: &[&str]) {}

    fn observe(&self, _name: &str, _value: f64, _label_values: &[&str]) {}
}
