// ============================================================================
// VALIDATORS - pure form checks, run before anything touches the network
// ============================================================================

use crate::config::{OTP_LENGTH, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
}

/// Field name → message map plus an overall validity flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: HashMap<String, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }
}

fn check_required(report: &mut ValidationReport, field: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        report.add(field, format!("{field} is required"));
        false
    } else {
        true
    }
}

fn check_email(report: &mut ValidationReport, email: &str) {
    if check_required(report, "email", email) && !EMAIL_RE.is_match(email.trim()) {
        report.add("email", "enter a valid email address");
    }
}

fn check_password(report: &mut ValidationReport, field: &str, password: &str) {
    if !check_required(report, field, password) {
        return;
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        report.add(
            field,
            format!("password must be at least {PASSWORD_MIN_LEN} characters"),
        );
    } else if password.chars().count() > PASSWORD_MAX_LEN {
        report.add(
            field,
            format!("password must be at most {PASSWORD_MAX_LEN} characters"),
        );
    }
}

pub fn validate_email(email: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_email(&mut report, email);
    report
}

pub fn validate_login(email: &str, password: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_email(&mut report, email);
    check_password(&mut report, "password", password);
    report
}

pub fn validate_otp(otp: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    let otp = otp.trim();
    if otp.len() != OTP_LENGTH || !otp.chars().all(|c| c.is_ascii_digit()) {
        report.add("otp", format!("enter the {OTP_LENGTH}-digit code"));
    }
    report
}

pub fn validate_reset_password(password: &str, confirm: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_password(&mut report, "password", password);
    if report.field("password").is_none() && password != confirm {
        report.add("confirm", "passwords do not match");
    }
    report
}

pub fn validate_profile(full_name: &str, email: &str, phone: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_required(&mut report, "full_name", full_name);
    check_email(&mut report, email);
    // phone is optional, but when present it must look like one
    let phone = phone.trim();
    if !phone.is_empty() {
        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
        let well_formed = phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
        if digits < 7 || !well_formed {
            report.add("phone", "enter a valid phone number");
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_login_has_empty_error_map() {
        let report = validate_login("renter@example.com", "s3cret-pass");
        assert!(report.is_valid());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn short_password_is_rejected() {
        let report = validate_login("renter@example.com", "short");
        assert!(!report.is_valid());
        assert!(report.field("password").unwrap().contains("at least 8"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["", "plainaddress", "a@b", "user@@example.com"] {
            let report = validate_login(email, "s3cret-pass");
            assert!(!report.is_valid(), "email {email:?} should be invalid");
            assert!(report.field("email").is_some());
        }
    }

    #[test]
    fn otp_must_be_exactly_four_digits() {
        assert!(validate_otp("1234").is_valid());
        assert!(validate_otp(" 0420 ").is_valid());

        for bad in ["123", "12345", "12a4", "", "12 4"] {
            let report = validate_otp(bad);
            assert!(!report.is_valid(), "otp {bad:?} should be invalid");
            assert!(report.field("otp").is_some());
        }
    }

    #[test]
    fn reset_requires_matching_confirmation() {
        let report = validate_reset_password("new-password", "new-password");
        assert!(report.is_valid());

        let report = validate_reset_password("new-password", "other-password");
        assert_eq!(report.field("confirm"), Some("passwords do not match"));
    }

    #[test]
    fn profile_phone_is_optional_but_checked() {
        assert!(validate_profile("Ada Lovelace", "ada@example.com", "").is_valid());
        assert!(validate_profile("Ada Lovelace", "ada@example.com", "+33 6 12 34 56 78").is_valid());
        assert!(!validate_profile("Ada Lovelace", "ada@example.com", "call-me").is_valid());
        assert!(!validate_profile("", "ada@example.com", "").is_valid());
    }
}
