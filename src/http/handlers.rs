//! Pass-through route handlers.
//!
//! Each handler maps to exactly one upstream `GET` and forwards nothing from
//! the inbound request.

use axum::extract::State;
use axum::Json;

use crate::health::{collect_snapshot, HealthSnapshot};
use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::upstream::endpoints;

type ApiResult = Result<Json<Envelope>, ApiError>;

async fn pass_through(state: &AppState, endpoint: &str) -> ApiResult {
    let data = state.client.get(endpoint).await?;
    Ok(Json(Envelope::success(data)))
}

pub async fn status(State(state): State<AppState>) -> ApiResult {
    pass_through(&state, endpoints::VPN_STATUS).await
}

pub async fn public_ip(State(state): State<AppState>) -> ApiResult {
    pass_through(&state, endpoints::PUBLIC_IP).await
}

pub async fn port_forwarded(State(state): State<AppState>) -> ApiResult {
    pass_through(&state, endpoints::PORT_FORWARD).await
}

pub async fn settings(State(state): State<AppState>) -> ApiResult {
    pass_through(&state, endpoints::OPENVPN_SETTINGS).await
}

pub async fn dns(State(state): State<AppState>) -> ApiResult {
    pass_through(&state, endpoints::DNS_STATUS).await
}

/// Aggregate snapshot. Always 200; failures are reported per section.
pub async fn health(State(state): State<AppState>) -> Json<HealthSnapshot> {
    Json(collect_snapshot(&state.client).await)
}
