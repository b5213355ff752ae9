use serde::Serialize;

use crate::core::model::alert::alert::Alert;

/// A cleaned and validated alert together with its identity.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertIngestResult {
    pub unique_id: String,
    pub alert: Alert,
}

/// Outcome for one entry of a batch. Rejections carry the first violated rule.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertBatchEntryResult {
    pub index: usize,
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AlertBatchEntryResult {
    pub fn accepted(index: usize, unique_id: String) -> Self {
        Self {
            index,
            ok: true,
            unique_id: Some(unique_id),
            error: None,
        }
    }

    pub fn rejected(index: usize, error: impl ToString) -> Self {
        Self {
            index,
            ok: false,
            unique_id: None,
            error: Some(error.to_string()),
        }
    }
}
