// ============================================================================
// AUTH SERVICE - login / OTP verification / password reset wrappers
// ============================================================================

use crate::models::{
    ApiOutcome, ForgotPasswordRequest, LoginData, LoginRequest, ResendOtpRequest,
    ResetPasswordRequest, VerifiedSession, VerifyOtpRequest,
};
use crate::services::api_client::{self, Operation};
use crate::session::SessionContext;

/// Log in for the session's role. When the account is already verified the
/// payload carries a token, which is stored right away; otherwise the server
/// has dispatched an OTP and the caller moves to the verification screen.
pub async fn login(session: &SessionContext, email: &str, password: &str) -> ApiOutcome<LoginData> {
    let op = Operation::post(format!("/api/{}/login", session.role()));
    let body = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };

    let outcome: ApiOutcome<LoginData> = api_client::call_with_body(&op, &body, session).await;

    if let ApiOutcome::Success { data, .. } = &outcome {
        if let Some(token) = &data.token {
            session.store_token(token, data.token_expires_at);
            log::info!("{} logged in without OTP step", session.role());
        } else {
            log::info!("OTP dispatched for {} {}", session.role(), data.user_id);
        }
    }
    outcome
}

/// Verify the 4-digit OTP. On success the issued token is stored for the
/// session's role.
pub async fn verify_otp(
    session: &SessionContext,
    user_id: &str,
    otp: &str,
) -> ApiOutcome<VerifiedSession> {
    let op = Operation::post(format!("/api/{}/verify-otp", session.role()));
    let body = VerifyOtpRequest {
        user_id: user_id.to_string(),
        otp: otp.trim().to_string(),
    };

    let outcome: ApiOutcome<VerifiedSession> = api_client::call_with_body(&op, &body, session).await;

    if let ApiOutcome::Success { data, .. } = &outcome {
        session.store_token(&data.token, data.token_expires_at);
        log::info!("{} session established", session.role());
    }
    outcome
}

/// Ask the server for a fresh OTP. The caller resets both countdowns.
pub async fn resend_otp(session: &SessionContext, user_id: &str) -> ApiOutcome<()> {
    let op = Operation::post(format!("/api/{}/resend-otp", session.role()));
    let body = ResendOtpRequest {
        user_id: user_id.to_string(),
    };
    api_client::call_with_body(&op, &body, session).await
}

/// Start a password reset; the server mails an OTP and answers with the
/// account's user id for the follow-up reset call.
pub async fn forgot_password(session: &SessionContext, email: &str) -> ApiOutcome<LoginData> {
    let op = Operation::post(format!("/api/{}/forgot-password", session.role()));
    let body = ForgotPasswordRequest {
        email: email.trim().to_string(),
    };
    api_client::call_with_body(&op, &body, session).await
}

/// Complete a password reset with the mailed OTP.
pub async fn reset_password(
    session: &SessionContext,
    user_id: &str,
    otp: &str,
    new_password: &str,
) -> ApiOutcome<()> {
    let op = Operation::post(format!("/api/{}/reset-password", session.role()));
    let body = ResetPasswordRequest {
        user_id: user_id.to_string(),
        otp: otp.trim().to_string(),
        new_password: new_password.to_string(),
    };
    api_client::call_with_body(&op, &body, session).await
}

/// Drop the stored token and every derived role key. Purely local.
pub fn logout(session: &SessionContext) {
    session.clear();
    log::info!("{} logged out", session.role());
}
