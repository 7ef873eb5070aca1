//! Pull payment: account authorization with OTP, then debit

use dkpg_domain::constants::paths;
use dkpg_domain::{
    AuthorizationData, AuthorizationRequest, DebitData, DebitRequest, DkResult, FaultField,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use super::execute_signed;
use crate::ports::GatewayTransport;

const PRECEDENCE: [FaultField; 2] = [FaultField::Description, FaultField::Message];

#[derive(Serialize)]
struct AuthorizationBody<'a> {
    transaction_datetime: &'a str,
    stan_number: &'a str,
    transaction_amount: Decimal,
    transaction_fee: Decimal,
    payment_desc: &'a str,
    account_number: &'a str,
    account_name: &'a str,
    phone_number: &'a str,
    remitter_account_number: &'a str,
    remitter_account_name: &'a str,
    remitter_bank_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_id: Option<&'a str>,
}

impl<'a> From<&'a AuthorizationRequest> for AuthorizationBody<'a> {
    fn from(r: &'a AuthorizationRequest) -> Self {
        Self {
            transaction_datetime: &r.transaction_datetime,
            stan_number: &r.stan_number,
            transaction_amount: r.transaction_amount,
            transaction_fee: r.transaction_fee.unwrap_or(Decimal::ZERO),
            payment_desc: &r.payment_desc,
            account_number: &r.account_number,
            account_name: &r.account_name,
            phone_number: &r.phone_number,
            remitter_account_number: &r.remitter_account_number,
            remitter_account_name: &r.remitter_account_name,
            remitter_bank_id: &r.remitter_bank_id,
            email_id: r.email_id.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct DebitBody<'a> {
    request_id: &'a str,
    #[serde(rename = "bfs_bfsTxnId")]
    bfs_txn_id: &'a str,
    #[serde(rename = "bfs_remitter_Otp")]
    bfs_remitter_otp: &'a str,
    #[serde(rename = "bfs_orderNo", skip_serializing_if = "Option::is_none")]
    bfs_order_no: Option<&'a str>,
}

/// Pull payment operations on a signed transport.
pub struct PullPayment<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: GatewayTransport + ?Sized> PullPayment<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Account inquiry and OTP request.
    #[instrument(skip_all, fields(stan_number = %request.stan_number))]
    pub fn authorize(&self, request: &AuthorizationRequest) -> DkResult<AuthorizationData> {
        request.validate()?;
        execute_signed(
            self.transport,
            paths::PULL_PAYMENT_AUTHORIZE,
            &AuthorizationBody::from(request),
            "Authorization",
            &PRECEDENCE,
        )
    }

    /// Complete an authorized payment with the remitter's OTP.
    #[instrument(skip_all, fields(request_id = %request.request_id))]
    pub fn debit(&self, request: &DebitRequest) -> DkResult<DebitData> {
        request.validate()?;
        let body = DebitBody {
            request_id: &request.request_id,
            bfs_txn_id: &request.bfs_txn_id,
            bfs_remitter_otp: &request.bfs_remitter_otp,
            bfs_order_no: request.bfs_order_no.as_deref(),
        };
        execute_signed(self.transport, paths::PULL_PAYMENT_DEBIT, &body, "Debit", &PRECEDENCE)
    }
}
