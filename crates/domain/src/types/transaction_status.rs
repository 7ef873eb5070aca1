//! Payment status verification for the current and previous business days

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DkResult;
use crate::utils::is_valid_date_format;
use crate::validation::{into_result, Violation, Violations};

/// Status payload; its shape varies by transaction type.
pub type TransactionStatusData = Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentDayStatusRequest {
    pub request_id: String,
    pub transaction_id: String,
    pub bene_account_number: String,
}

impl CurrentDayStatusRequest {
    pub fn violations(&self) -> Vec<Violation> {
        let mut v = Violations::new();
        v.require("request_id", &self.request_id)
            .require("transaction_id", &self.transaction_id)
            .require("bene_account_number", &self.bene_account_number);
        v.into_vec()
    }

    pub fn validate(&self) -> DkResult<()> {
        into_result(&self.violations())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousDaysStatusRequest {
    pub request_id: String,
    pub transaction_id: String,
    /// `YYYY-MM-DD`
    pub transaction_date: String,
    pub bene_account_number: String,
}

impl PreviousDaysStatusRequest {
    pub fn violations(&self) -> Vec<Violation> {
        let mut v = Violations::new();
        v.require("request_id", &self.request_id)
            .require("transaction_id", &self.transaction_id)
            .require("transaction_date", &self.transaction_date)
            .require("bene_account_number", &self.bene_account_number)
            .format(
                "transaction_date",
                &self.transaction_date,
                is_valid_date_format,
                "transaction_date must be in YYYY-MM-DD format",
            );
        v.into_vec()
    }

    pub fn validate(&self) -> DkResult<()> {
        into_result(&self.violations())
    }
}
