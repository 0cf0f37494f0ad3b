// ============================================================================
// API CLIENT - one request/normalize path for every endpoint
// ============================================================================
// Services declare an Operation descriptor and a typed payload; everything
// about transport, auth headers and envelope normalization lives here.
// Single attempt per call, no retries, and nothing throws past this layer.

use crate::config::{BACKEND_URL, SUCCESS_CODE};
use crate::models::{ApiOutcome, ErrorCode, ServerEnvelope};
use crate::session::SessionContext;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Descriptor for one remote operation: where it goes and whether it carries
/// the session token. Every endpoint shares the platform success sentinel.
#[derive(Debug, Clone)]
pub struct Operation {
    method: Method,
    path: String,
    authenticated: bool,
}

impl Operation {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            authenticated: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Attach the role's session token (header omitted when none is stored).
    pub fn authenticated(mut self) -> Self {
        self.authenticated = true;
        self
    }
}

/// Execute an operation without a request body.
pub async fn call<T: DeserializeOwned>(op: &Operation, session: &SessionContext) -> ApiOutcome<T> {
    execute(op, session, None).await
}

/// Execute an operation with a JSON request body.
pub async fn call_with_body<B: Serialize, T: DeserializeOwned>(
    op: &Operation,
    body: &B,
    session: &SessionContext,
) -> ApiOutcome<T> {
    let body = match serde_json::to_value(body) {
        Ok(v) => v,
        Err(e) => {
            log::error!("failed to serialize request for {}: {}", op.path, e);
            return ApiOutcome::failure("failed to build request", ErrorCode::Unknown);
        }
    };
    execute(op, session, Some(body)).await
}

async fn execute<T: DeserializeOwned>(
    op: &Operation,
    session: &SessionContext,
    body: Option<serde_json::Value>,
) -> ApiOutcome<T> {
    let url = format!("{}{}", BACKEND_URL, op.path);
    let mut builder = match op.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    };

    if op.authenticated {
        if let Some(token) = session.token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
    }

    let sent = match body {
        Some(json) => match builder.json(&json) {
            Ok(request) => request.send().await,
            Err(e) => {
                log::error!("failed to build request for {}: {}", op.path, e);
                return ApiOutcome::failure("failed to build request", ErrorCode::Unknown);
            }
        },
        None => builder.send().await,
    };

    let response = match sent {
        Ok(response) => response,
        Err(e) => {
            let (code, message) = classify_transport_error(&e.to_string());
            log::error!("{} {} failed: {}", method_name(op.method), op.path, e);
            return ApiOutcome::failure(message, code);
        }
    };

    let status = response.status();
    let body = response.json::<serde_json::Value>().await.ok();

    if status == 401 && op.authenticated {
        session.handle_unauthorized();
    }

    normalize(status, body, SUCCESS_CODE)
}

fn method_name(method: Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
        Method::Put => "PUT",
    }
}

/// Map a transport-level failure (no HTTP response at all) to its
/// classification.
fn classify_transport_error(message: &str) -> (ErrorCode, String) {
    let lowered = message.to_ascii_lowercase();
    if lowered.contains("timeout") || lowered.contains("timed out") {
        (
            ErrorCode::TimeoutError,
            "the request timed out, please try again".to_string(),
        )
    } else {
        (
            ErrorCode::NetworkError,
            "could not reach the server, check your connection".to_string(),
        )
    }
}

/// Normalize an HTTP outcome into the uniform local envelope.
///
/// Precedence: a non-2xx transport status always classifies the failure; a
/// 2xx always defers to the envelope sentinel (`status_code` / `in_error`).
pub fn normalize<T: DeserializeOwned>(
    status: u16,
    body: Option<serde_json::Value>,
    success_code: &str,
) -> ApiOutcome<T> {
    if !(200..300).contains(&status) {
        let (error, code) = failure_from_status(status, body.as_ref());
        return ApiOutcome::Failure { error, code };
    }

    let envelope = match body.map(serde_json::from_value::<ServerEnvelope>) {
        Some(Ok(envelope)) => envelope,
        Some(Err(e)) => {
            log::error!("unparseable server envelope: {}", e);
            return ApiOutcome::failure("malformed server response", ErrorCode::Unknown);
        }
        None => return ApiOutcome::failure("empty server response", ErrorCode::Unknown),
    };

    if envelope.status_code != success_code || envelope.in_error {
        // HTTP transport succeeded, application-level failure
        let code = if envelope.errors.is_some() {
            ErrorCode::ValidationError
        } else {
            ErrorCode::Unknown
        };
        let error = envelope
            .errors
            .as_ref()
            .map(|fields| join_field_errors(fields))
            .or_else(|| envelope.human_message())
            .unwrap_or_else(|| "request failed".to_string());
        return ApiOutcome::Failure { error, code };
    }

    match serde_json::from_value::<T>(envelope.payload()) {
        Ok(data) => ApiOutcome::Success {
            data,
            message: envelope.human_message(),
        },
        Err(e) => {
            log::error!("unexpected payload shape: {}", e);
            ApiOutcome::failure("malformed server response", ErrorCode::Unknown)
        }
    }
}

fn failure_from_status(status: u16, body: Option<&serde_json::Value>) -> (String, ErrorCode) {
    let code = ErrorCode::from_status(status);
    let envelope = body
        .cloned()
        .and_then(|v| serde_json::from_value::<ServerEnvelope>(v).ok());

    if code == ErrorCode::ValidationError {
        if let Some(fields) = envelope.as_ref().and_then(|e| e.errors.as_ref()) {
            return (join_field_errors(fields), code);
        }
    }

    let message = envelope
        .as_ref()
        .and_then(|e| e.human_message())
        .unwrap_or_else(|| default_message(code, status));
    (message, code)
}

fn default_message(code: ErrorCode, status: u16) -> String {
    match code {
        ErrorCode::InvalidRequest => "invalid request".to_string(),
        ErrorCode::InvalidCredentials => "invalid credentials".to_string(),
        ErrorCode::AccessDenied => "access denied".to_string(),
        ErrorCode::ServiceUnavailable => "service unavailable".to_string(),
        ErrorCode::ValidationError => "validation failed".to_string(),
        ErrorCode::RateLimited => "too many attempts, slow down".to_string(),
        ErrorCode::ServerError => "server error, please try again later".to_string(),
        _ => format!("request failed (HTTP {status})"),
    }
}

/// Aggregate field-level messages into one stable, human-readable line.
fn join_field_errors(fields: &std::collections::HashMap<String, String>) -> String {
    let mut parts: Vec<String> = fields
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn http_401_maps_to_invalid_credentials() {
        let outcome: ApiOutcome<serde_json::Value> = normalize(401, None, SUCCESS_CODE);
        match outcome {
            ApiOutcome::Failure { code, .. } => {
                assert_eq!(code, ErrorCode::InvalidCredentials);
                assert_eq!(code.as_str(), "INVALID_CREDENTIALS");
            }
            ApiOutcome::Success { .. } => panic!("401 must normalize to a failure"),
        }
    }

    #[test]
    fn http_failure_keeps_server_reason() {
        let body = json!({ "status_code": "403", "in_error": true, "reason": "account suspended" });
        let outcome: ApiOutcome<serde_json::Value> = normalize(403, Some(body), SUCCESS_CODE);
        assert_eq!(
            outcome,
            ApiOutcome::Failure {
                error: "account suspended".to_string(),
                code: ErrorCode::AccessDenied,
            }
        );
    }

    #[test]
    fn successful_envelope_yields_nested_payload() {
        let body = json!({
            "status_code": "000",
            "in_error": false,
            "reason": "OK",
            "data": { "data": { "user_id": "u-1", "email": "r@example.com" } }
        });
        let outcome: ApiOutcome<serde_json::Value> = normalize(200, Some(body), SUCCESS_CODE);
        match outcome {
            ApiOutcome::Success { data, message } => {
                assert_eq!(data["user_id"], "u-1");
                assert_eq!(message.as_deref(), Some("OK"));
            }
            ApiOutcome::Failure { error, .. } => panic!("expected success, got {error}"),
        }
    }

    #[test]
    fn http_200_with_error_envelope_is_an_application_failure() {
        let body = json!({ "status_code": "014", "in_error": true, "reason": "OTP expired" });
        let outcome: ApiOutcome<serde_json::Value> = normalize(200, Some(body), SUCCESS_CODE);
        assert_eq!(
            outcome,
            ApiOutcome::Failure {
                error: "OTP expired".to_string(),
                code: ErrorCode::Unknown,
            }
        );
    }

    #[test]
    fn non_2xx_wins_over_a_success_looking_envelope() {
        // transport status takes precedence when the two disagree
        let body = json!({ "status_code": "000", "in_error": false });
        let outcome: ApiOutcome<serde_json::Value> = normalize(500, Some(body), SUCCESS_CODE);
        assert_eq!(outcome.error_code(), Some(ErrorCode::ServerError));
    }

    #[test]
    fn http_422_aggregates_field_errors() {
        let body = json!({
            "status_code": "422",
            "in_error": true,
            "errors": { "email": "already taken", "phone": "too short" }
        });
        let outcome: ApiOutcome<serde_json::Value> = normalize(422, Some(body), SUCCESS_CODE);
        assert_eq!(
            outcome,
            ApiOutcome::Failure {
                error: "email: already taken; phone: too short".to_string(),
                code: ErrorCode::ValidationError,
            }
        );
    }

    #[test]
    fn envelope_field_errors_classify_as_validation_even_on_200() {
        let body = json!({
            "status_code": "010",
            "in_error": true,
            "errors": { "password": "too weak" }
        });
        let outcome: ApiOutcome<serde_json::Value> = normalize(200, Some(body), SUCCESS_CODE);
        assert_eq!(outcome.error_code(), Some(ErrorCode::ValidationError));
    }

    #[test]
    fn empty_body_on_2xx_is_a_failure() {
        let outcome: ApiOutcome<serde_json::Value> = normalize(204, None, SUCCESS_CODE);
        assert_eq!(outcome.error_code(), Some(ErrorCode::Unknown));
    }

    #[test]
    fn missing_payload_deserializes_into_unit() {
        let body = json!({ "status_code": "000", "in_error": false, "reason": "done" });
        let outcome: ApiOutcome<()> = normalize(200, Some(body), SUCCESS_CODE);
        assert!(outcome.is_success());
    }

    #[test]
    fn transport_errors_classify_by_message() {
        let (code, _) = classify_transport_error("request timed out after 30s");
        assert_eq!(code, ErrorCode::TimeoutError);

        let (code, _) = classify_transport_error("NetworkError: failed to fetch");
        assert_eq!(code, ErrorCode::NetworkError);
    }

    #[test]
    fn success_requires_the_exact_sentinel() {
        let body = json!({ "status_code": "OK", "in_error": false, "data": { "data": 7 } });
        let outcome: ApiOutcome<i32> = normalize(200, Some(body.clone()), "OK");
        assert_eq!(outcome.into_data(), Some(7));

        // same envelope against the platform sentinel is a failure
        let outcome: ApiOutcome<i32> = normalize(200, Some(body), SUCCESS_CODE);
        assert!(!outcome.is_success());
    }
}
