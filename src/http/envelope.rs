//! Uniform `{ok, data | error}` response wrapper.

use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Response wrapper used by every API route.
///
/// `ok == true` carries `data` and no `error`; `ok == false` carries `error`
/// and no `data`. Fields are private so only the constructors can build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Respond with this envelope and the given status.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl<E: Display> From<Result<Value, E>> for Envelope {
    fn from(result: Result<Value, E>) -> Self {
        match result {
            Ok(data) => Envelope::success(data),
            Err(e) => Envelope::failure(e.to_string()),
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status = if self.ok {
            StatusCode::OK
        } else {
            StatusCode::BAD_GATEWAY
        };
        self.into_response_with(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let value = serde_json::to_value(Envelope::success(json!({"status": "running"}))).unwrap();
        assert_eq!(value, json!({"ok": true, "data": {"status": "running"}}));
    }

    #[test]
    fn test_failure_shape() {
        let value = serde_json::to_value(Envelope::failure("boom")).unwrap();
        assert_eq!(value, json!({"ok": false, "error": "boom"}));
    }

    #[test]
    fn test_null_data_is_kept() {
        let value = serde_json::to_value(Envelope::success(Value::Null)).unwrap();
        assert_eq!(value, json!({"ok": true, "data": null}));
    }

    #[test]
    fn test_from_result() {
        let ok: Envelope = Ok::<_, String>(json!(1)).into();
        assert!(ok.is_ok());
        assert_eq!(ok.data(), Some(&json!(1)));
        assert_eq!(ok.error(), None);

        let err: Envelope = Err::<Value, _>("nope").into();
        assert!(!err.is_ok());
        assert_eq!(err.error(), Some("nope"));
        assert_eq!(err.data(), None);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Envelope::success(json!({})).into_response().status(), StatusCode::OK);
        assert_eq!(Envelope::failure("x").into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
