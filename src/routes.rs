use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::api::dto::ApiResponse;
use crate::api::routes::alert_routes::alert_routes;
use crate::app_state::AppState;

const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");
const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub max_batch_size: usize,
}

/// Root router: service info, health, versioned API and a JSON 404.
pub fn app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .nest("/api/v1", api_v1_router())
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

fn api_v1_router() -> Router<AppState> {
    Router::new().nest("/alerts", alert_routes())
}

async fn service_info(State(state): State<AppState>) -> Json<ApiResponse<ServiceInfo>> {
    Json(ApiResponse::ok(ServiceInfo {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        max_batch_size: state.config.max_batch_size,
    }))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Same `message` body as [`crate::errors::AppError`] so clients parse one error shape.
async fn handler_404(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": format!("No route for {} {}", method, uri.path())
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::app_state::build_app_state;
    use crate::config::ServerConfig;
    use crate::core::metrics::noop_metrics::NoopMetrics;

    fn state() -> AppState {
        let config = ServerConfig {
            max_batch_size: 25,
            ..Default::default()
        };
        build_app_state(config, Arc::new(NoopMetrics))
    }

    #[tokio::test]
    async fn service_info_reports_batch_limit() {
        let Json(response) = service_info(State(state())).await;

        assert!(response.success);
        assert_eq!(response.data.service, "alertmgr-core");
        assert_eq!(response.data.max_batch_size, 25);
        assert_eq!(
            serde_json::to_value(&response.data).unwrap()["maxBatchSize"],
            json!(25)
        );
    }

    #[tokio::test]
    async fn health_is_json() {
        let Json(body) = health_check().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn unknown_route_uses_error_body() {
        let response = handler_404(Method::POST, Uri::from_static("/api/v2/alerts?x=1"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "message": "No route for POST /api/v2/alerts" }));
    }

    #[test]
    fn router_builds_with_state() {
        let _: Router = app_router().with_state(state());
    }
}
