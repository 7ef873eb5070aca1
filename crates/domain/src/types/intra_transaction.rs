//! Intra-bank (DK to DK) beneficiary inquiry and fund transfer

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::DkResult;
use crate::validation::{into_result, Violation, Violations};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInquiryRequest {
    pub request_id: String,
    pub amount: Decimal,
    /// ISO currency code, e.g. `BTN`
    pub currency: String,
    pub bene_bank_code: String,
    pub bene_account_number: String,
    pub source_account_number: String,
    #[serde(default)]
    pub source_account_name: Option<String>,
}

impl AccountInquiryRequest {
    pub fn violations(&self) -> Vec<Violation> {
        let mut v = Violations::new();
        v.require("request_id", &self.request_id)
            .non_negative("amount", self.amount)
            .require("currency", &self.currency)
            .require("bene_bank_code", &self.bene_bank_code)
            .require("bene_account_number", &self.bene_account_number)
            .require("source_account_number", &self.source_account_number);
        v.into_vec()
    }

    pub fn validate(&self) -> DkResult<()> {
        into_result(&self.violations())
    }
}

/// Transfer initiated after a successful [`AccountInquiryRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundTransferRequest {
    pub request_id: String,
    pub inquiry_id: String,
    pub transaction_datetime: String,
    /// Falls back to the configured source app
    #[serde(default)]
    pub source_app: Option<String>,
    pub transaction_amount: Decimal,
    pub currency: String,
    /// Defaults to `INTRA`
    #[serde(default)]
    pub payment_type: Option<String>,
    pub source_account_number: String,
    pub bene_cust_name: String,
    pub bene_account_number: String,
    pub bene_bank_code: String,
    pub narration: String,
    #[serde(default)]
    pub source_account_name: Option<String>,
}

impl FundTransferRequest {
    pub fn violations(&self) -> Vec<Violation> {
        let mut v = Violations::new();
        v.require("request_id", &self.request_id)
            .require("inquiry_id", &self.inquiry_id)
            .non_negative("transaction_amount", self.transaction_amount)
            .require("currency", &self.currency)
            .require("transaction_datetime", &self.transaction_datetime)
            .require("bene_bank_code", &self.bene_bank_code)
            .require("bene_account_number", &self.bene_account_number)
            .require("bene_cust_name", &self.bene_cust_name)
            .require("source_account_number", &self.source_account_number)
            .require("narration", &self.narration);
        v.into_vec()
    }

    pub fn validate(&self) -> DkResult<()> {
        into_result(&self.violations())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountInquiryData {
    #[serde(default)]
    pub inquiry_id: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundTransferData {
    #[serde(default)]
    pub inquiry_id: Option<String>,
    #[serde(default)]
    pub txn_status_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
