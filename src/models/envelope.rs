// ============================================================================
// RESPONSE ENVELOPE - server wire shape and the normalized local result
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw envelope every QuickRent endpoint answers with, whatever the HTTP
/// status. The payload, when present, sits nested at `data.data`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerEnvelope {
    #[serde(default)]
    pub status_code: String,
    #[serde(default)]
    pub in_error: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// Field-level validation messages, only on 422-style failures.
    #[serde(default)]
    pub errors: Option<HashMap<String, String>>,
}

impl ServerEnvelope {
    /// Human-readable message, whichever field the server populated.
    pub fn human_message(&self) -> Option<String> {
        self.reason.clone().or_else(|| self.message.clone())
    }

    /// The nested payload at `data.data`, if any.
    pub fn payload(&self) -> serde_json::Value {
        self.data
            .as_ref()
            .and_then(|d| d.get("data"))
            .cloned()
            .unwrap_or(serde_json::Value::Null)
    }
}

/// Classification attached to every failed call. Serialized names are the
/// wire-visible codes the UI switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "INVALID_REQUEST")]
    InvalidRequest,
    #[serde(rename = "INVALID_CREDENTIALS")]
    InvalidCredentials,
    #[serde(rename = "ACCESS_DENIED")]
    AccessDenied,
    #[serde(rename = "SERVICE_UNAVAILABLE")]
    ServiceUnavailable,
    #[serde(rename = "VALIDATION_ERROR")]
    ValidationError,
    #[serde(rename = "RATE_LIMITED")]
    RateLimited,
    #[serde(rename = "SERVER_ERROR")]
    ServerError,
    #[serde(rename = "NETWORK_ERROR")]
    NetworkError,
    #[serde(rename = "TIMEOUT_ERROR")]
    TimeoutError,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl ErrorCode {
    /// Fixed mapping from HTTP status to classification.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorCode::InvalidRequest,
            401 => ErrorCode::InvalidCredentials,
            403 => ErrorCode::AccessDenied,
            404 => ErrorCode::ServiceUnavailable,
            422 => ErrorCode::ValidationError,
            429 => ErrorCode::RateLimited,
            500..=599 => ErrorCode::ServerError,
            _ => ErrorCode::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::AccessDenied => "ACCESS_DENIED",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::RateLimited => "RATE_LIMITED",
            ErrorCode::ServerError => "SERVER_ERROR",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::TimeoutError => "TIMEOUT_ERROR",
            ErrorCode::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform result every service wrapper returns. Callers never see a raw
/// transport error or a half-parsed envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success { data: T, message: Option<String> },
    Failure { error: String, code: ErrorCode },
}

impl<T> ApiOutcome<T> {
    pub fn failure(error: impl Into<String>, code: ErrorCode) -> Self {
        ApiOutcome::Failure {
            error: error.into(),
            code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success { .. })
    }

    /// Data on success, discarding the message.
    pub fn into_data(self) -> Option<T> {
        match self {
            ApiOutcome::Success { data, .. } => Some(data),
            ApiOutcome::Failure { .. } => None,
        }
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ApiOutcome::Success { .. } => None,
            ApiOutcome::Failure { code, .. } => Some(*code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_fixed() {
        assert_eq!(ErrorCode::from_status(400), ErrorCode::InvalidRequest);
        assert_eq!(ErrorCode::from_status(401), ErrorCode::InvalidCredentials);
        assert_eq!(ErrorCode::from_status(403), ErrorCode::AccessDenied);
        assert_eq!(ErrorCode::from_status(404), ErrorCode::ServiceUnavailable);
        assert_eq!(ErrorCode::from_status(422), ErrorCode::ValidationError);
        assert_eq!(ErrorCode::from_status(429), ErrorCode::RateLimited);
        assert_eq!(ErrorCode::from_status(500), ErrorCode::ServerError);
        assert_eq!(ErrorCode::from_status(503), ErrorCode::ServerError);
        assert_eq!(ErrorCode::from_status(418), ErrorCode::Unknown);
    }

    #[test]
    fn payload_is_read_from_nested_data() {
        let envelope: ServerEnvelope = serde_json::from_value(serde_json::json!({
            "status_code": "000",
            "in_error": false,
            "data": { "data": { "token": "abc" } }
        }))
        .unwrap();

        assert_eq!(envelope.payload()["token"], "abc");
    }

    #[test]
    fn missing_payload_is_null() {
        let envelope: ServerEnvelope = serde_json::from_value(serde_json::json!({
            "status_code": "000",
            "in_error": false
        }))
        .unwrap();

        assert!(envelope.payload().is_null());
    }
}
