pub mod validators;

pub use validators::{
    validate_email, validate_login, validate_otp, validate_profile, validate_reset_password,
    ValidationReport,
};
