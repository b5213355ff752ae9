/// Metrics facade implemented by the hosting application.
///
/// Label values are positional and must match the labels given at registration.
pub trait Metrics: Send + Sync {
    fn register_counter(&self, name: &str, help: &str, labels: &[&str]);

    fn register_gauge(&self, name: &str, help: &str, labels: &[&str]);

    fn register_histogram(&self, name: &str, help: &str, buckets: &[f64], labels: &[&str]);

    /// Adds `value` to a counter.
    fn add(&self, name: &str, value: f64, label_values: &[&str]);

    fn inc(&self, name: &str, label_values: &[&str]) {
        self.add(name, 1.0, label_values);
    }

    /// Sets a gauge.
    fn set(&self, name: &str, value: f64, label_values: &[&str]);

    /// Records a histogram observation.
    fn observe(&self, name: &str, value: f64, label_values: &[&str]);
}
