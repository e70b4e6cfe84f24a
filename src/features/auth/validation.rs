//! Field validators for the auth forms. They are pure and give early UX
//! feedback only; the backend repeats every check.

use regex::Regex;
use thiserror::Error;

/// Minimum password length enforced by the client.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Digits kept by the phone formatter.
pub const PHONE_DIGITS: usize = 10;

/// Local, pre-network failures. `Display` is the message shown to the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),
    #[error("Email address looks invalid.")]
    InvalidEmail,
    #[error("Password must be at least {} characters long.", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,
    #[error("Password must contain at least one letter, one number, and one special character.")]
    PasswordComposition,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Phone number must be in the format XXX-XXX-XXXX.")]
    InvalidPhone,
    #[error("Invalid or missing reset token")]
    MissingResetToken,
}

/// Checks length first, then composition: a letter, a digit and an ASCII symbol.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    let has_letter = password.chars().any(char::is_alphabetic);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| c.is_ascii_punctuation());
    if has_letter && has_digit && has_symbol {
        Ok(())
    } else {
        Err(ValidationError::PasswordComposition)
    }
}

pub fn is_strong_password(password: &str) -> bool {
    validate_password(password).is_ok()
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").is_ok_and(|regex| regex.is_match(phone)) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    validate_phone(phone).is_ok()
}

/// Normalizes free-form phone input to `XXX-XXX-XXXX` as the user types. Non-digits
/// are dropped, at most ten digits are kept and hyphens appear once a group fills.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

pub fn validate_passwords_match(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if passwords_match(password, confirm) {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

/// Rejects blank input for a required field, naming the field in the message.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Normalizes an email by trimming whitespace and lowercasing.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic format check: one `@`, no whitespace, a dot in the domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    require("Email", email)?;
    let email = normalize_email(email);
    if Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(&email)) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}
