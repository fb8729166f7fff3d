//! VPN start/stop control.

use std::str::FromStr;

use axum::extract::{rejection::PathRejection, Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::upstream::endpoints;

/// Action accepted on `PUT /api/vpn/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VpnAction {
    Start,
    Stop,
}

impl VpnAction {
    /// Status value the control API expects for this action.
    pub fn desired_status(self) -> &'static str {
        match self {
            VpnAction::Start => "running",
            VpnAction::Stop => "stopped",
        }
    }

    pub fn request_body(self) -> Value {
        json!({ "status": self.desired_status() })
    }
}

impl FromStr for VpnAction {
    type Err = ApiError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(VpnAction::Start),
            "stop" => Ok(VpnAction::Stop),
            other => Err(ApiError::InvalidAction(other.to_string())),
        }
    }
}

/// Validate the action, then ask the upstream to change state.
pub async fn set_vpn_state(
    State(state): State<AppState>,
    action: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let Path(action) = action.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected undecodable VPN action");
        ApiError::InvalidAction(rejection.body_text())
    })?;
    let action: VpnAction = action.parse().inspect_err(|_| {
        tracing::warn!(action = %action, "Rejected unknown VPN action");
    })?;

    tracing::info!(action = ?action, status = action.desired_status(), "Changing VPN state");

    let data = state
        .client
        .put(endpoints::VPN_STATUS, &action.request_body())
        .await?;
    Ok(Json(Envelope::success(data)))
}
