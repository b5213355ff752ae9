//! Alert controller: runs producer payloads through clean and validate

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::dto::alert_dto::AlertBatchResponse;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::model::alert::alert::Alert;
use crate::domain::alert::dto::alert_ingest_result::AlertIngestResult;
use crate::errors::AppError;

pub struct AlertController;

impl AlertController {
    pub async fn validate_alert(
        State(state): State<AppState>,
        payload: Result<Json<Alert>, JsonRejection>,
    ) -> Result<Json<ApiResponse<AlertIngestResult>>, AppError> {
        let Json(alert) = payload.map_err(body_error)?;
        to_json(state.alert_service.ingest(alert))
    }

    pub async fn validate_batch(
        State(state): State<AppState>,
        payload: Result<Json<Vec<Option<Alert>>>, JsonRejection>,
    ) -> Result<Json<ApiResponse<AlertBatchResponse>>, AppError> {
        let Json(alerts) = payload.map_err(body_error)?;

        if alerts.len() > state.config.max_batch_size {
            return Err(AppError::BodyParsingError(format!(
                "too many alerts in batch, expected <={}",
                state.config.max_batch_size
            )));
        }

        let results = state.alert_service.ingest_batch(alerts);
        to_json(Ok::<_, AppError>(AlertBatchResponse::from(results)))
    }
}

fn body_error(rejection: JsonRejection) -> AppError {
    AppError::BodyParsingError(rejection.body_text())
}
