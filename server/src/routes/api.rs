use std::fmt::Write as _;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use crate::config::DATASET_CACHE_CONTROL;
use crate::state::{AppState, CachedPayload, ObservabilitySnapshot};

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "districts": state.district_count,
        "news_items": state.news_count,
        "started_at": state.started_at,
    }))
}

/// Serve the pre-serialized district list.
pub async fn get_districts(State(state): State<AppState>, headers: HeaderMap) -> Response {
    state.observability.record_districts_request();
    cached_json_response(&state, &state.districts, &headers)
}

/// Serve the simulated news feed as `[{ time, content }]`.
pub async fn get_news(State(state): State<AppState>, headers: HeaderMap) -> Response {
    state.observability.record_news_request();
    cached_json_response(&state, &state.news, &headers)
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_prometheus_metrics(
        state.district_count,
        state.news_count,
        state.observability.snapshot(),
    );

    (
        [
            (header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
}

fn cached_json_response(state: &AppState, payload: &CachedPayload, headers: &HeaderMap) -> Response {
    if if_none_match_matches(headers, &payload.etag) {
        state.observability.record_not_modified();
        return not_modified_response(DATASET_CACHE_CONTROL, Some(payload.etag.as_str()));
    }

    json_bytes_response(
        (*payload.json).clone(),
        DATASET_CACHE_CONTROL,
        Some(payload.etag.as_str()),
    )
}

fn render_prometheus_metrics(
    district_count: usize,
    news_count: usize,
    observability: ObservabilitySnapshot,
) -> String {
    let mut body = String::new();
    let _ = writeln!(
        body,
        "# HELP flood_watch_districts Number of districts in the static dataset."
    );
    let _ = writeln!(body, "# TYPE flood_watch_districts gauge");
    let _ = writeln!(body, "flood_watch_districts {district_count}");

    let _ = writeln!(
        body,
        "# HELP flood_watch_news_items Number of items in the simulated news feed."
    );
    let _ = writeln!(body, "# TYPE flood_watch_news_items gauge");
    let _ = writeln!(body, "flood_watch_news_items {news_count}");

    let _ = writeln!(
        body,
        "# HELP flood_watch_districts_requests_total Total district API requests."
    );
    let _ = writeln!(body, "# TYPE flood_watch_districts_requests_total counter");
    let _ = writeln!(
        body,
        "flood_watch_districts_requests_total {}",
        observability.districts_requests_total
    );

    let _ = writeln!(
        body,
        "# HELP flood_watch_news_requests_total Total news API requests."
    );
    let _ = writeln!(body, "# TYPE flood_watch_news_requests_total counter");
    let _ = writeln!(
        body,
        "flood_watch_news_requests_total {}",
        observability.news_requests_total
    );

    let _ = writeln!(
        body,
        "# HELP flood_watch_not_modified_responses_total Total 304 responses for dataset requests."
    );
    let _ = writeln!(
        body,
        "# TYPE flood_watch_not_modified_responses_total counter"
    );
    let _ = writeln!(
        body,
        "flood_watch_not_modified_responses_total {}",
        observability.not_modified_responses_total
    );

    body
}

fn json_bytes_response(body: Bytes, cache_control: &'static str, etag: Option<&str>) -> Response {
    let mut response = Response::new(Body::from(body));
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );
    if let Some(etag) = etag
        && let Ok(etag_header) = HeaderValue::from_str(etag)
    {
        headers.insert(header::ETAG, etag_header);
    }
    response
}

fn not_modified_response(cache_control: &'static str, etag: Option<&str>) -> Response {
    let mut response = StatusCode::NOT_MODIFIED.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );
    if let Some(etag) = etag
        && let Ok(etag_header) = HeaderValue::from_str(etag)
    {
        headers.insert(header::ETAG, etag_header);
    }
    response
}

fn normalize_etag(candidate: &str) -> &str {
    candidate.strip_prefix("W/").unwrap_or(candidate).trim()
}

fn if_none_match_matches(headers: &HeaderMap, etag: &str) -> bool {
    let Some(value) = headers.get(header::IF_NONE_MATCH) else {
        return false;
    };
    let Ok(raw) = value.to_str() else {
        return false;
    };

    raw.split(',').any(|candidate| {
        let candidate = candidate.trim();
        candidate == "*" || normalize_etag(candidate) == normalize_etag(etag)
    })
}
