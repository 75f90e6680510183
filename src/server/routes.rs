use std::collections::HashMap;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};

use crate::core::contract::ServiceRequest;
use crate::server::AppState;

/// One POST route named at startup; everything else falls through to the
/// fixed 404 body.
pub fn build_router(state: AppState) -> Router {
    let route_path = format!("/{}", state.route_name);

    Router::new()
        .route(&route_path, post(handle_dispatch))
        .fallback(handle_unknown_route)
        .with_state(state)
}

async fn handle_dispatch(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    // Bodies that are not valid JSON are wrapped, not rejected.
    let body_json = match serde_json::from_slice::<Value>(&body) {
        Ok(value) => value,
        Err(_) => json!({ "raw": String::from_utf8_lossy(&body) }),
    };

    let request = ServiceRequest {
        headers: header_pairs(&headers),
        body: body_json,
    };

    tracing::debug!(route = %state.route_name, "dispatching request");

    // Always 200: success and failure are both carried in-band by the `ok`
    // flag of the handler's JSON value.
    Json(state.service.handle(request).await)
}

async fn handle_unknown_route(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({ "error": format!("Ruta no valida. Use /{}", state.route_name) });
    (StatusCode::NOT_FOUND, Json(body))
}

fn header_pairs(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|text| (name.to_string(), text.to_string()))
        })
        .collect()
}
