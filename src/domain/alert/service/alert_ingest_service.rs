use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::metrics::metrics_trait::Metrics;
use crate::core::model::alert::alert::Alert;
use crate::domain::alert::dto::alert_ingest_result::{AlertBatchEntryResult, AlertIngestResult};
use crate::errors::AlertValidationError;

pub const ALERTS_INGESTED_METRIC: &str = "alerts_ingested_total";

const RESULT_ACCEPTED: &str = "accepted";
const RESULT_REJECTED: &str = "rejected";

/// Cleans, validates and identifies one alert.
///
/// The identity is computed from the cleaned record, so two producers sending
/// the same alert with different whitespace or casing get the same ID.
pub fn ingest_alert(mut alert: Alert) -> Result<AlertIngestResult, AlertValidationError> {
    alert.clean();

    if let Err(err) = alert.validate() {
        warn!(
            slack_channel_id = %alert.slack_channel_id,
            route_key = %alert.route_key,
            correlation_id = %alert.correlation_id,
            "Rejected alert: {}",
            err
        );
        return Err(err);
    }

    let unique_id = alert.unique_id();
    debug!(%unique_id, severity = %alert.severity, "Accepted alert");

    Ok(AlertIngestResult { unique_id, alert })
}

/// Ingest entry point shared by the API handlers. Counts every outcome.
pub struct AlertIngestService {
    metrics: Arc<dyn Metrics>,
}

impl AlertIngestService {
    pub fn new(metrics: Arc<dyn Metrics>) -> Self {
        metrics.register_counter(
            ALERTS_INGESTED_METRIC,
            "Number of alerts run through clean and validate",
            &["result"],
        );

        Self { metrics }
    }

    pub fn ingest(&self, alert: Alert) -> Result<AlertIngestResult, AlertValidationError> {
        let result = ingest_alert(alert);
        self.record(result.is_ok());
        result
    }

    /// Ingests every entry independently. Absent entries are rejected as
    /// `alert is nil` without affecting the rest of the batch.
    pub fn ingest_batch(&self, alerts: Vec<Option<Alert>>) -> Vec<AlertBatchEntryResult> {
        let total = alerts.len();

        let results: Vec<AlertBatchEntryResult> = alerts
            .into_iter()
            .enumerate()
            .map(|(index, alert)| {
                let outcome = match alert {
                    Some(alert) => self.ingest(alert),
                    None => {
                        self.record(false);
                        Err(AlertValidationError::nil("alert"))
                    }
                };

                match outcome {
                    Ok(ingested) => AlertBatchEntryResult::accepted(index, ingested.unique_id),
                    Err(err) => AlertBatchEntryResult::rejected(index, err),
                }
            })
            .collect();

        debug!(
            total,
            accepted = results.iter().filter(|r| r.ok).count(),
            "Ingested alert batch"
        );

        results
    }

    fn record(&self, accepted: bool) {
        let label = if accepted { RESULT_ACCEPTED } else { RESULT_REJECTED };
        self.metrics.inc(ALERTS_INGESTED_METRIC, &[label]);
    }
}
