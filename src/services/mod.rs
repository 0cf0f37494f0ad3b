pub mod api_client;
pub mod auth_service;
pub mod moderation_service;
pub mod profile_service;

pub use auth_service::{forgot_password, login, logout, resend_otp, reset_password, verify_otp};
pub use moderation_service::{list_reports, list_reviews, moderate_review, update_report};
pub use profile_service::{fetch_profile, update_profile};
