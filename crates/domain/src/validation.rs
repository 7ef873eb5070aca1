//! Pure request validation
//!
//! Request structs report problems as a list of [`Violation`]s. Nothing here
//! touches the network; [`into_result`] is what turns a non-empty list into an
//! `InvalidParameter` error before a request is signed.

use std::fmt;

use rust_decimal::Decimal;

use crate::errors::{DkError, DkResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field absent or empty
    Missing,
    /// Amount below zero
    Negative,
    /// Present but malformed
    InvalidFormat,
}

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn missing(field: &'static str) -> Self {
        Self { field, kind: ViolationKind::Missing, message: format!("{field} is required") }
    }

    pub fn negative(field: &'static str) -> Self {
        Self {
            field,
            kind: ViolationKind::Negative,
            message: format!("{field} must not be negative"),
        }
    }

    pub fn invalid_format(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, kind: ViolationKind::InvalidFormat, message: message.into() }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Collects violations while walking a request.
#[derive(Debug, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `field` as missing when `value` is empty.
    pub fn require(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.0.push(Violation::missing(field));
        }
        self
    }

    /// Record `field` as missing when an optional value is absent or empty.
    pub fn require_some(&mut self, field: &'static str, value: Option<&str>) -> &mut Self {
        self.require(field, value.unwrap_or_default())
    }

    pub fn non_negative(&mut self, field: &'static str, amount: Decimal) -> &mut Self {
        if amount.is_sign_negative() && !amount.is_zero() {
            self.0.push(Violation::negative(field));
        }
        self
    }

    /// Record a format problem unless `ok` holds. Empty values are left to `require`.
    pub fn format(
        &mut self,
        field: &'static str,
        value: &str,
        ok: impl FnOnce(&str) -> bool,
        message: &str,
    ) -> &mut Self {
        if !value.is_empty() && !ok(value) {
            self.0.push(Violation::invalid_format(field, message));
        }
        self
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

/// Fold violations into a single `InvalidParameter` error.
///
/// Missing fields are grouped as `Missing required parameters: a, b`; other
/// problems follow, separated by `; `.
pub fn into_result(violations: &[Violation]) -> DkResult<()> {
    if violations.is_empty() {
        return Ok(());
    }

    let missing: Vec<&str> = violations
        .iter()
        .filter(|v| v.kind == ViolationKind::Missing)
        .map(|v| v.field)
        .collect();

    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("Missing required parameters: {}", missing.join(", ")));
    }
    parts.extend(
        violations.iter().filter(|v| v.kind != ViolationKind::Missing).map(|v| v.message.clone()),
    );

    Err(DkError::invalid_parameter(parts.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_list_is_ok() {
        assert!(into_result(&[]).is_ok());
    }

    #[test]
    fn test_missing_fields_are_grouped() {
        let mut v = Violations::new();
        v.require("request_id", "").require("currency", "BTN").require_some("mcc_code", None);
        let err = into_result(&v.into_vec()).unwrap_err();
        assert_eq!(err.message(), "Missing required parameters: request_id, mcc_code");
    }

    #[test]
    fn test_format_problems_follow_missing() {
        let mut v = Violations::new();
        v.require("transaction_id", "")
            .non_negative("amount", dec!(-1.50))
            .format("mcc_code", "54", |s| s.len() == 4, "mcc_code must be 4 digits");
        let violations = v.into_vec();
        assert_eq!(violations.len(), 3);

        let err = into_result(&violations).unwrap_err();
        assert_eq!(
            err.message(),
            "Missing required parameters: transaction_id; amount must not be negative; \
             mcc_code must be 4 digits"
        );
    }

    #[test]
    fn test_zero_and_empty_values_skip_secondary_checks() {
        let mut v = Violations::new();
        v.non_negative("amount", dec!(0)).format("mcc_code", "", |_| false, "unused");
        assert!(v.into_vec().is_empty());
    }
}
