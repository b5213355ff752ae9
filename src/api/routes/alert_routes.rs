//! Alert routes (e.g., /api/v1/alerts/*)

use axum::{routing::post, Router};

use crate::api::controller::alert::AlertController;
use crate::app_state::AppState;

pub fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/validate", post(AlertController::validate_alert))
        .route("/validate/batch", post(AlertController::validate_batch))
}
