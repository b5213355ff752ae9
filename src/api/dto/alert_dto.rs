//! Alert API DTOs
use serde::Serialize;

use crate::domain::alert::dto::alert_ingest_result::AlertBatchEntryResult;

#[derive(Debug, Serialize)]
pub struct AlertBatchResponse {
    pub accepted: usize,
    pub rejected: usize,
    pub results: Vec<AlertBatchEntryResult>,
}

impl From<Vec<AlertBatchEntryResult>> for AlertBatchResponse {
    fn from(results: Vec<AlertBatchEntryResult>) -> Self {
        let accepted = results.iter().filter(|r| r.ok).count();

        Self {
            accepted,
            rejected: results.len() - accepted,
            results,
        }
    }
}
