//! Canonical JSON request bodies
//!
//! The canonical form is compact JSON (no whitespace) with keys in the order
//! the caller supplied them: struct declaration order, or insertion order for
//! `serde_json::Value` maps. Keys are never sorted. The same logical payload
//! always encodes to the same bytes, and those exact bytes are both signed and
//! transmitted.

use std::fmt;

use dkpg_domain::{DkError, DkResult};
use serde::Serialize;

/// Serialized request body, ready to be signed and sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBody(String);

impl CanonicalBody {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode `body` into its canonical form.
pub fn canonical_json<T: Serialize + ?Sized>(body: &T) -> DkResult<CanonicalBody> {
    serde_json::to_string(body)
        .map(CanonicalBody)
        .map_err(|e| DkError::Signature(format!("Failed to serialize request body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[derive(Serialize)]
    struct QrBody<'a> {
        request_id: &'a str,
        currency: &'a str,
        bene_account_number: &'a str,
        amount: rust_decimal::Decimal,
        mcc_code: &'a str,
    }

    #[test]
    fn test_compact_and_ordered() {
        let body = json!({"request_id": "REQ_1", "currency": "BTN", "amount": 0});
        let canonical = canonical_json(&body).unwrap();
        assert_eq!(canonical.as_str(), r#"{"request_id":"REQ_1","currency":"BTN","amount":0}"#);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let body = QrBody {
            request_id: "REQ_1",
            currency: "BTN",
            bene_account_number: "110158212197",
            amount: dec!(12.50),
            mcc_code: "5411",
        };
        let first = canonical_json(&body).unwrap();
        let second = canonical_json(&body).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_key_order_changes_output() {
        let a = canonical_json(&json!({"a": 1, "b": 2})).unwrap();
        let b = canonical_json(&json!({"b": 2, "a": 1})).unwrap();
        assert_ne!(a, b);
        assert_eq!(b.as_str(), r#"{"b":2,"a":1}"#);
    }

    #[test]
    fn test_nested_maps_keep_order() {
        let body = json!({"outer": {"z": "last-declared-first", "a": [1, 2]}, "id": "x"});
        assert_eq!(
            canonical_json(&body).unwrap().as_str(),
            r#"{"outer":{"z":"last-declared-first","a":[1,2]},"id":"x"}"#
        );
    }

    #[test]
    fn test_decimal_amounts_are_strings() {
        let body = QrBody {
            request_id: "REQ_1",
            currency: "BTN",
            bene_account_number: "110158212197",
            amount: dec!(100.10),
            mcc_code: "5411",
        };
        let canonical = canonical_json(&body).unwrap();
        assert!(canonical.as_str().contains(r#""amount":"100.10""#));
    }
}
