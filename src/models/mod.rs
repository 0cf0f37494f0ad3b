pub mod auth;
pub mod envelope;
pub mod moderation;
pub mod profile;
pub mod role;

pub use auth::{
    ForgotPasswordRequest, LoginData, LoginRequest, ResendOtpRequest, ResetPasswordRequest,
    VerifiedSession, VerifyOtpRequest,
};
pub use envelope::{ApiOutcome, ErrorCode, ServerEnvelope};
pub use moderation::{
    ModerateReviewRequest, Report, ReportStatus, Review, ReviewAction, ReviewStatus,
    UpdateReportRequest,
};
pub use profile::{UpdateProfileRequest, UserProfile};
pub use role::Role;
