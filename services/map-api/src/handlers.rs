//! HTTP handlers.

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use map_common::{
    parse_intensity_json, IntensityAssignment, MapError, MapResult, SizeClass,
};
use metrics_exporter_prometheus::PrometheusHandle;
use renderer::RenderOptions;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

use crate::state::AppState;

/// Query parameters for `GET /map`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MapQueryParams {
    /// JSON array of `{"id": .., "scale": ..}`. Required.
    pub scale: Option<String>,
    /// `1`, `2` or `3` for 1x, 2x or 4x output.
    pub size: Option<String>,
    /// Footer caption; empty uses the default attribution.
    pub footer: Option<String>,
    /// `true` to draw the level at each active region.
    pub scale_text: Option<String>,
}

/// A validated `/map` request, ready to render.
#[derive(Debug, Clone)]
pub struct MapRequest {
    pub intensities: IntensityAssignment,
    pub options: RenderOptions,
}

/// Validate query parameters without touching geometry or fonts.
pub fn parse_map_query(params: &MapQueryParams) -> MapResult<MapRequest> {
    let raw = params
        .scale
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| MapError::InvalidInput("scale parameter is required".to_string()))?;

    let entries = parse_intensity_json(raw)?;
    let intensities = IntensityAssignment::from_entries(&entries)?;

    let options = RenderOptions {
        size: SizeClass::from_query(params.size.as_deref()),
        footer: params.footer.clone().filter(|f| !f.is_empty()),
        show_labels: params.scale_text.as_deref() == Some("true"),
        ..RenderOptions::default()
    };

    Ok(MapRequest {
        intensities,
        options,
    })
}

/// GET /map
#[instrument(skip_all)]
pub async fn map_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<MapQueryParams>,
) -> Response {
    let request = match parse_map_query(&params) {
        Ok(request) => request,
        Err(e) => return error_response(&state, e),
    };

    let start = Instant::now();
    let active = request.intensities.active_count();
    let size = request.options.size;

    match render_request(Arc::clone(&state), request).await {
        Ok(png) => {
            let elapsed = start.elapsed();
            state.metrics.record_render(elapsed, png.len());
            state.metrics.record_request(StatusCode::OK.as_u16());
            info!(
                size = ?size,
                active,
                bytes = png.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Map rendered"
            );
            ([(header::CONTENT_TYPE, "image/png")], Bytes::from(png)).into_response()
        }
        Err(e) => error_response(&state, e),
    }
}

/// Render on the blocking pool so rasterization never stalls the runtime.
async fn render_request(state: Arc<AppState>, request: MapRequest) -> MapResult<Vec<u8>> {
    tokio::task::spawn_blocking(move || {
        let dataset = state.dataset.dataset()?;
        let options = RenderOptions {
            font_weight: state.font_weight,
            ..request.options
        };
        renderer::render(dataset.regions(), &request.intensities, &options, &state.fonts)
    })
    .await
    .map_err(|e| MapError::Rendering(format!("render task failed: {}", e)))?
}

fn error_response(state: &AppState, err: MapError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if err.is_client_error() {
        warn!(kind = err.kind(), error = %err, "Rejected map request");
    } else {
        error!(kind = err.kind(), error = %err, "Map request failed");
    }
    state.metrics.record_error(err.kind(), err.is_client_error());
    state.metrics.record_request(status.as_u16());

    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        err.to_string(),
    )
        .into_response()
}

/// GET /health
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /metrics - Prometheus exposition
pub async fn metrics_handler(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
}

/// GET /api/metrics - JSON snapshot for dashboards
pub async fn api_metrics_handler(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(state.metrics.snapshot())
}
