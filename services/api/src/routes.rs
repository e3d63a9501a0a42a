use crate::infra::AppState;
use adscraft::campaign::{AnalysisReport, CampaignForm, CampaignInput};
use adscraft::error::AppError;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::json;
use tracing::{debug, info};

/// Campaign analysis plus the operational endpoints. `/ready` and `/metrics`
/// expect an [`AppState`] extension layered on by the server.
pub fn analysis_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/campaign/analysis", post(campaign_analysis_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn campaign_analysis_endpoint(
    Json(input): Json<CampaignInput>,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut form = CampaignForm::with_input(input);
    let report = form
        .submit()
        .map(AnalysisReport::clone)
        .map_err(|err| {
            info!(%err, "campaign analysis rejected");
            err
        })?;

    debug!(
        company = %form.input().company_name,
        niche = %form.input().niche,
        clicks = report.estimated_results.clicks,
        "campaign analysis computed"
    );

    Ok(Json(report))
}
