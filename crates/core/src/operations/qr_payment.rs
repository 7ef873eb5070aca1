//! QR code generation and image helpers

use std::fs;
use std::io;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dkpg_domain::constants::paths;
use dkpg_domain::{DkError, DkResult, FaultField, QrCodeData, QrRequest};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

use super::execute_signed;
use crate::ports::GatewayTransport;

const PRECEDENCE: [FaultField; 2] = [FaultField::Detail, FaultField::Message];

#[derive(Serialize)]
struct QrBody<'a> {
    request_id: &'a str,
    currency: &'a str,
    bene_account_number: &'a str,
    amount: Decimal,
    mcc_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    remarks: Option<&'a str>,
}

pub struct QrPayment<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: GatewayTransport + ?Sized> QrPayment<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Generate a QR image; zero amount gives a static QR.
    #[instrument(skip_all, fields(request_id = %request.request_id, is_static = request.is_static()))]
    pub fn generate_qr(&self, request: &QrRequest) -> DkResult<QrCodeData> {
        request.validate()?;
        let body = QrBody {
            request_id: &request.request_id,
            currency: &request.currency,
            bene_account_number: &request.bene_account_number,
            amount: request.amount,
            mcc_code: &request.mcc_code,
            remarks: request.remarks.as_deref(),
        };
        execute_signed(self.transport, paths::GENERATE_QR, &body, "QR Generation", &PRECEDENCE)
    }
}

/// Decode the base64 image returned by [`QrPayment::generate_qr`].
pub fn decode_qr_image(image: &str) -> DkResult<Vec<u8>> {
    STANDARD
        .decode(image.trim())
        .map_err(|e| DkError::Parse(format!("Invalid base64 QR image: {e}")))
}

/// Decode and write a QR image to `path`.
pub fn save_qr_image(image: &str, path: impl AsRef<Path>) -> io::Result<()> {
    let bytes =
        decode_qr_image(image).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path.as_ref(), &bytes)?;
    debug!(path = %path.as_ref().display(), bytes = bytes.len(), "Saved QR image");
    Ok(())
}
