//! Payment operation wrappers
//!
//! Each wrapper validates its request locally, builds the wire body in the
//! field order the gateway expects, signs it with the session key and checks
//! the response envelope. Validation and key checks happen before any network
//! call.

pub mod intra_transaction;
pub mod pull_payment;
pub mod qr_payment;
pub mod transaction_status;

use dkpg_domain::envelope::ResponseEnvelope;
use dkpg_domain::{DkError, DkResult, FaultField};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::ports::GatewayTransport;
use crate::signing::{canonical_json, RequestSigner};

pub use intra_transaction::IntraTransaction;
pub use pull_payment::PullPayment;
pub use qr_payment::{decode_qr_image, save_qr_image, QrPayment};
pub use transaction_status::TransactionStatus;

const MISSING_KEY_MESSAGE: &str = "Private key not available. Call authenticate first";

/// Sign `body` with the session key, POST it and unwrap a successful envelope.
///
/// `operation` names the call in error messages; `precedence` picks which
/// envelope field explains a rejection.
pub(crate) fn execute_signed<T, B, D>(
    transport: &T,
    path: &str,
    body: &B,
    operation: &str,
    precedence: &[FaultField],
) -> DkResult<D>
where
    T: GatewayTransport + ?Sized,
    B: Serialize,
    D: DeserializeOwned,
{
    let pem = transport.private_key().ok_or_else(|| DkError::Signature(MISSING_KEY_MESSAGE.into()))?;
    let signer = RequestSigner::from_pem(&pem)?;

    let canonical = canonical_json(body)?;
    let headers = signer.sign_body(&canonical)?;

    debug!(path, nonce = %headers.nonce, body_len = canonical.len(), "Sending signed request");
    let envelope: ResponseEnvelope<Value> =
        transport.post_signed(path, canonical, headers)?.into_envelope()?;

    let data = ensure_success(envelope, operation, precedence)?;
    serde_json::from_value(data)
        .map_err(|e| DkError::Parse(format!("Unexpected {operation} response data: {e}")))
}

/// Turn a non-`0000` envelope into a `Transaction` error; otherwise take its data.
pub(crate) fn ensure_success<D>(
    envelope: ResponseEnvelope<D>,
    operation: &str,
    precedence: &[FaultField],
) -> DkResult<D> {
    if envelope.is_success() {
        return envelope.into_data();
    }

    let fault = envelope.fault();
    let reason = fault.first_of(precedence).unwrap_or("Unknown error").to_string();
    warn!(
        operation,
        response_code = fault.response_code.as_deref().unwrap_or_default(),
        "Gateway rejected request"
    );
    Err(DkError::transaction(format!("{operation} failed: {reason}"), fault))
}

#[cfg(test)]
mod tests {
    use dkpg_domain::GatewayFault;
    use serde_json::json;

    use super::*;
    use crate::testing::RecordingTransport;

    #[test]
    fn test_missing_key_fails_before_network() {
        let transport = RecordingTransport::unauthenticated();
        let err = execute_signed::<_, _, Value>(
            &transport,
            "/v1/generate_qr",
            &json!({"request_id": "REQ_1"}),
            "QR Generation",
            &[FaultField::Detail],
        )
        .unwrap_err();

        assert_eq!(err, DkError::Signature(MISSING_KEY_MESSAGE.into()));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn test_rejection_uses_precedence() {
        let envelope = ResponseEnvelope::<Value> {
            response_code: Some("5001".into()),
            response_message: Some("message".into()),
            response_description: Some("description".into()),
            response_detail: None,
            response_data: None,
        };

        let err = ensure_success(
            envelope.clone(),
            "Debit",
            &[FaultField::Description, FaultField::Message],
        )
        .unwrap_err();
        assert_eq!(err.message(), "Debit failed: description");
        assert_eq!(err.response_code(), Some("5001"));

        let err = ensure_success(envelope, "QR Generation", &[FaultField::Detail]).unwrap_err();
        assert_eq!(err.message(), "QR Generation failed: Unknown error");
    }

    #[test]
    fn test_text_response_is_parse_error() {
        let transport = RecordingTransport::new()
            .respond_with(dkpg_domain::ResponseBody::Text("<html>maintenance</html>".into()));
        let err = execute_signed::<_, _, Value>(
            &transport,
            "/v1/generate_qr",
            &json!({"request_id": "REQ_1"}),
            "QR Generation",
            &[FaultField::Detail],
        )
        .unwrap_err();
        assert!(matches!(err, DkError::Parse(_)));
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_transport_errors_pass_through() {
        let fault = GatewayFault::with_code("4004");
        let transport = RecordingTransport::new().fail_with(DkError::InvalidParameter {
            message: "not found".into(),
            fault: fault.clone(),
        });
        let err = execute_signed::<_, _, Value>(
            &transport,
            "/v1/transaction/status",
            &json!({}),
            "Transaction Status Check",
            &[FaultField::Description],
        )
        .unwrap_err();
        assert_eq!(err.fault(), Some(&fault));
    }
}
