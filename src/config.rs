/// Backend base URL, fixed at compile time:
/// - Development: http://localhost:4000 (default)
/// - Production: set via BACKEND_URL env var (see build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:4000",
};

/// Envelope status code the server uses for a successful operation.
pub const SUCCESS_CODE: &str = "000";

/// Seconds a freshly issued OTP stays valid.
pub const OTP_EXPIRY_SECS: u32 = 600;

/// Cooldown started after a resend before another resend is allowed.
/// Only a resend arms this timer: a screen with no stored cooldown entry
/// (first mount, verified OTP, expired entry) restores to 0 so the button
/// is immediately available. Without the 30 s gate the resend button could
/// be hammered straight into the server's rate limiter.
pub const RESEND_COOLDOWN_SECS: u32 = 30;

/// Fixed OTP length used across the platform.
pub const OTP_LENGTH: usize = 4;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 64;
