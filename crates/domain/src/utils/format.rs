//! Field format checks and display helpers

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

#[allow(clippy::expect_used)]
static ACCOUNT_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{8,15}$").expect("ACCOUNT_NUMBER_REGEX pattern is valid")
});

#[allow(clippy::expect_used)]
static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{8}$").expect("PHONE_NUMBER_REGEX pattern is valid")
});

#[allow(clippy::expect_used)]
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_+\-.]+@[a-z0-9\-]+(\.[a-z0-9\-]+)*\.[a-z]+$")
        .expect("EMAIL_REGEX pattern is valid")
});

#[allow(clippy::expect_used)]
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("DATE_REGEX pattern is valid")
});

#[allow(clippy::expect_used)]
static MCC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}$").expect("MCC_REGEX pattern is valid")
});

/// 8 to 15 digits.
pub fn is_valid_account_number(value: &str) -> bool {
    ACCOUNT_NUMBER_REGEX.is_match(value)
}

/// Local 8 digit phone number.
pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Shape check only (`YYYY-MM-DD`); see [`parse_date`] for calendar validity.
pub fn is_valid_date_format(value: &str) -> bool {
    DATE_REGEX.is_match(value)
}

pub fn is_valid_mcc_format(value: &str) -> bool {
    MCC_REGEX.is_match(value)
}

pub fn is_valid_amount(amount: Decimal) -> bool {
    !amount.is_sign_negative() || amount.is_zero()
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !is_valid_date_format(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Amount with exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Trim surrounding whitespace.
pub fn sanitize(value: &str) -> String {
    value.trim().to_string()
}

/// Mask the middle of a sensitive value for logging.
///
/// Keeps `visible` characters at each end. Values of `2 * visible` characters
/// or fewer are returned unchanged.
pub fn mask_sensitive(value: &str, visible: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= visible * 2 {
        return value.to_string();
    }

    let hidden = chars.len() - visible * 2;
    let mut masked = String::with_capacity(chars.len());
    masked.extend(&chars[..visible]);
    masked.extend(std::iter::repeat('*').take(hidden));
    masked.extend(&chars[chars.len() - visible..]);
    masked
}
