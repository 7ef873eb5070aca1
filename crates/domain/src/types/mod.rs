//! Operation request and response types
//!
//! Request structs model optional gateway fields as `Option`s and expose pure
//! validation through `violations()` / `validate()`. Response data types keep
//! any fields they do not name in `extra`.

pub mod intra_transaction;
pub mod pull_payment;
pub mod qr_payment;
pub mod transaction_status;

pub use intra_transaction::{
    AccountInquiryData, AccountInquiryRequest, FundTransferData, FundTransferRequest,
};
pub use pull_payment::{AuthorizationData, AuthorizationRequest, DebitData, DebitRequest};
pub use qr_payment::{QrCodeData, QrRequest};
pub use transaction_status::{
    CurrentDayStatusRequest, PreviousDaysStatusRequest, TransactionStatusData,
};
