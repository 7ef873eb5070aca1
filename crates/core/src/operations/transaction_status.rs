//! Payment status verification

use dkpg_domain::constants::paths;
use dkpg_domain::{
    CurrentDayStatusRequest, DkResult, FaultField, PreviousDaysStatusRequest,
    TransactionStatusData,
};
use serde::Serialize;
use tracing::instrument;

use super::execute_signed;
use crate::ports::GatewayTransport;

const OPERATION: &str = "Transaction Status Check";
const PRECEDENCE: [FaultField; 3] =
    [FaultField::Description, FaultField::Detail, FaultField::Message];

#[derive(Serialize)]
struct CurrentDayBody<'a> {
    request_id: &'a str,
    transaction_id: &'a str,
    bene_account_number: &'a str,
}

#[derive(Serialize)]
struct PreviousDaysBody<'a> {
    request_id: &'a str,
    transaction_id: &'a str,
    // Gateway spelling.
    #[serde(rename = "trasnaction_date")]
    transaction_date: &'a str,
    bene_account_number: &'a str,
}

pub struct TransactionStatus<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: GatewayTransport + ?Sized> TransactionStatus<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Status of a payment made today.
    #[instrument(skip_all, fields(transaction_id = %request.transaction_id))]
    pub fn check_current_day(
        &self,
        request: &CurrentDayStatusRequest,
    ) -> DkResult<TransactionStatusData> {
        request.validate()?;
        let body = CurrentDayBody {
            request_id: &request.request_id,
            transaction_id: &request.transaction_id,
            bene_account_number: &request.bene_account_number,
        };
        execute_signed(self.transport, paths::STATUS_CURRENT_DAY, &body, OPERATION, &PRECEDENCE)
    }

    /// Status of a payment from a previous business day.
    #[instrument(skip_all, fields(transaction_id = %request.transaction_id))]
    pub fn check_previous_days(
        &self,
        request: &PreviousDaysStatusRequest,
    ) -> DkResult<TransactionStatusData> {
        request.validate()?;
        let body = PreviousDaysBody {
            request_id: &request.request_id,
            transaction_id: &request.transaction_id,
            transaction_date: &request.transaction_date,
            bene_account_number: &request.bene_account_number,
        };
        execute_signed(self.transport, paths::STATUS_PREVIOUS_DAYS, &body, OPERATION, &PRECEDENCE)
    }
}
