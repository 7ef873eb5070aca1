//! Pull payment: authorization (account inquiry + OTP) and debit

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::DkResult;
use crate::validation::{into_result, Violation, Violations};

/// Authorization request. Triggers an OTP to the remitter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    /// UTC timestamp, ISO-8601
    pub transaction_datetime: String,
    /// 12 character trace number, see [`crate::utils::generate_stan`]
    pub stan_number: String,
    pub transaction_amount: Decimal,
    /// Sent as `0` when absent
    #[serde(default)]
    pub transaction_fee: Option<Decimal>,
    pub payment_desc: String,
    pub account_number: String,
    pub account_name: String,
    #[serde(default)]
    pub email_id: Option<String>,
    pub phone_number: String,
    pub remitter_account_number: String,
    pub remitter_account_name: String,
    pub remitter_bank_id: String,
}

impl AuthorizationRequest {
    pub fn violations(&self) -> Vec<Violation> {
        let mut v = Violations::new();
        v.require("transaction_datetime", &self.transaction_datetime)
            .require("stan_number", &self.stan_number)
            .require("payment_desc", &self.payment_desc)
            .require("account_number", &self.account_number)
            .require("account_name", &self.account_name)
            .require("phone_number", &self.phone_number)
            .require("remitter_account_number", &self.remitter_account_number)
            .require("remitter_account_name", &self.remitter_account_name)
            .require("remitter_bank_id", &self.remitter_bank_id)
            .non_negative("transaction_amount", self.transaction_amount);
        if let Some(fee) = self.transaction_fee {
            v.non_negative("transaction_fee", fee);
        }
        v.into_vec()
    }

    pub fn validate(&self) -> DkResult<()> {
        into_result(&self.violations())
    }
}

/// Debit request completing an authorization with the remitter's OTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebitRequest {
    pub request_id: String,
    /// `bfs_txn_id` returned by the authorization
    pub bfs_txn_id: String,
    pub bfs_remitter_otp: String,
    #[serde(default)]
    pub bfs_order_no: Option<String>,
}

impl DebitRequest {
    pub fn violations(&self) -> Vec<Violation> {
        let mut v = Violations::new();
        v.require("request_id", &self.request_id)
            .require("bfs_txn_id", &self.bfs_txn_id)
            .require("bfs_remitter_otp", &self.bfs_remitter_otp);
        v.into_vec()
    }

    pub fn validate(&self) -> DkResult<()> {
        into_result(&self.violations())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationData {
    #[serde(default)]
    pub bfs_txn_id: Option<String>,
    #[serde(default)]
    pub stan_number: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub remitter_account_number: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebitData {
    #[serde(default)]
    pub bfs_txn_id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn authorization() -> AuthorizationRequest {
        AuthorizationRequest {
            transaction_datetime: "2025-01-15T10:30:00Z".into(),
            stan_number: "020112345678".into(),
            transaction_amount: dec!(100.00),
            transaction_fee: None,
            payment_desc: "Order 42".into(),
            account_number: "110158212197".into(),
            account_name: "Merchant".into(),
            email_id: None,
            phone_number: "17123456".into(),
            remitter_account_number: "770182571".into(),
            remitter_account_name: "Customer".into(),
            remitter_bank_id: "1040".into(),
        }
    }

    #[test]
    fn test_complete_authorization_is_valid() {
        assert!(authorization().violations().is_empty());
        assert!(authorization().validate().is_ok());
    }

    #[test]
    fn test_authorization_lists_missing_fields_in_order() {
        let request = AuthorizationRequest {
            stan_number: String::new(),
            remitter_bank_id: String::new(),
            ..authorization()
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.message(), "Missing required parameters: stan_number, remitter_bank_id");
    }

    #[test]
    fn test_negative_fee_is_rejected() {
        let request = AuthorizationRequest { transaction_fee: Some(dec!(-1)), ..authorization() };
        let violations = request.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "transaction_fee");
    }

    #[test]
    fn test_debit_requires_otp() {
        let request = DebitRequest {
            request_id: "REQ_1".into(),
            bfs_txn_id: "BFS123".into(),
            ..DebitRequest::default()
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.message(), "Missing required parameters: bfs_remitter_otp");
    }

    #[test]
    fn test_authorization_data_keeps_unknown_fields() {
        let data: AuthorizationData = serde_json::from_value(serde_json::json!({
            "bfs_txn_id": "BFS123",
            "stan_number": "020112345678",
            "remitter_name": "Customer"
        }))
        .unwrap();
        assert_eq!(data.bfs_txn_id.as_deref(), Some("BFS123"));
        assert_eq!(data.extra.get("remitter_name"), Some(&Value::from("Customer")));
    }
}
