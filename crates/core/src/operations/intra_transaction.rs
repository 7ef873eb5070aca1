//! Intra-bank (DK to DK) beneficiary inquiry and fund transfer

use dkpg_domain::constants::{paths, DEFAULT_PAYMENT_TYPE};
use dkpg_domain::{
    AccountInquiryData, AccountInquiryRequest, DkResult, FaultField, FundTransferData,
    FundTransferRequest,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use super::execute_signed;
use crate::ports::GatewayTransport;

const PRECEDENCE: [FaultField; 2] = [FaultField::Description, FaultField::Message];

#[derive(Serialize)]
struct InquiryBody<'a> {
    request_id: &'a str,
    amount: Decimal,
    currency: &'a str,
    bene_bank_code: &'a str,
    bene_account_number: &'a str,
    // Gateway spelling.
    #[serde(rename = "soure_account_number")]
    source_account_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_account_name: Option<&'a str>,
}

#[derive(Serialize)]
struct TransferBody<'a> {
    request_id: &'a str,
    inquiry_id: &'a str,
    transaction_datetime: &'a str,
    source_app: &'a str,
    transaction_amount: Decimal,
    currency: &'a str,
    payment_type: &'a str,
    source_account_number: &'a str,
    bene_cust_name: &'a str,
    bene_account_number: &'a str,
    bene_bank_code: &'a str,
    narration: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_account_name: Option<&'a str>,
}

pub struct IntraTransaction<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: GatewayTransport + ?Sized> IntraTransaction<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Validate the beneficiary before a transfer; yields the `inquiry_id`.
    #[instrument(skip_all, fields(request_id = %request.request_id))]
    pub fn account_inquiry(&self, request: &AccountInquiryRequest) -> DkResult<AccountInquiryData> {
        request.validate()?;
        let body = InquiryBody {
            request_id: &request.request_id,
            amount: request.amount,
            currency: &request.currency,
            bene_bank_code: &request.bene_bank_code,
            bene_account_number: &request.bene_account_number,
            source_account_number: &request.source_account_number,
            source_account_name: request.source_account_name.as_deref(),
        };
        execute_signed(self.transport, paths::ACCOUNT_INQUIRY, &body, "Account Inquiry", &PRECEDENCE)
    }

    #[instrument(skip_all, fields(request_id = %request.request_id, inquiry_id = %request.inquiry_id))]
    pub fn fund_transfer(&self, request: &FundTransferRequest) -> DkResult<FundTransferData> {
        request.validate()?;
        let body = TransferBody {
            request_id: &request.request_id,
            inquiry_id: &request.inquiry_id,
            transaction_datetime: &request.transaction_datetime,
            source_app: request.source_app.as_deref().unwrap_or(self.transport.source_app()),
            transaction_amount: request.transaction_amount,
            currency: &request.currency,
            payment_type: request.payment_type.as_deref().unwrap_or(DEFAULT_PAYMENT_TYPE),
            source_account_number: &request.source_account_number,
            bene_cust_name: &request.bene_cust_name,
            bene_account_number: &request.bene_account_number,
            bene_bank_code: &request.bene_bank_code,
            narration: &request.narration,
            source_account_name: request.source_account_name.as_deref(),
        };
        execute_signed(self.transport, paths::FUND_TRANSFER, &body, "Fund Transfer", &PRECEDENCE)
    }
}
