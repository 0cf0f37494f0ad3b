use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload of a successful login. A token is only present when the account
/// skips OTP verification (e.g. an already-verified device); otherwise the
/// server has dispatched an OTP and `otp_required` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub otp_required: bool,
    #[serde(default)]
    pub token: Option<String>,
    /// Unix timestamp, seconds.
    #[serde(default)]
    pub token_expires_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyOtpRequest {
    pub user_id: String,
    pub otp: String,
}

/// Payload of a successful OTP verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedSession {
    pub token: String,
    #[serde(default)]
    pub token_expires_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResendOtpRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResetPasswordRequest {
    pub user_id: String,
    pub otp: String,
    pub new_password: String,
}
