//! QR code generation
//!
//! An amount of zero yields a static QR (payer enters the amount); a positive
//! amount yields a dynamic QR with the amount fixed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::DkResult;
use crate::utils::is_valid_mcc_format;
use crate::validation::{into_result, Violation, Violations};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrRequest {
    pub request_id: String,
    pub currency: String,
    pub bene_account_number: String,
    pub amount: Decimal,
    /// 4 digit merchant category code
    pub mcc_code: String,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl QrRequest {
    pub fn is_static(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn violations(&self) -> Vec<Violation> {
        let mut v = Violations::new();
        v.require("request_id", &self.request_id)
            .require("currency", &self.currency)
            .require("bene_account_number", &self.bene_account_number)
            .non_negative("amount", self.amount)
            .require("mcc_code", &self.mcc_code)
            .format("mcc_code", &self.mcc_code, is_valid_mcc_format, "mcc_code must be 4 digits");
        v.into_vec()
    }

    pub fn validate(&self) -> DkResult<()> {
        into_result(&self.violations())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QrCodeData {
    /// Base64 encoded image
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
