use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::metrics::metrics_trait::Metrics;
use crate::domain::alert::service::alert_ingest_service::AlertIngestService;

#[derive(Clone)]
pub struct AppState {
    pub alert_service: Arc<AlertIngestService>,
    pub config: Arc<ServerConfig>,
}

pub fn build_app_state(config: ServerConfig, metrics: Arc<dyn Metrics>) -> AppState {
    AppState {
        alert_service: Arc::new(AlertIngestService::new(metrics)),
        config: Arc::new(config),
    }
}
