//! Conversions from external infrastructure errors into domain errors.

use dkpg_domain::DkError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DkError);

impl From<InfraError> for DkError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DkError> for InfraError {
    fn from(value: DkError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDkError {
    fn into_dk(self) -> DkError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DkError */
/* -------------------------------------------------------------------------- */

impl IntoDkError for HttpError {
    fn into_dk(self) -> DkError {
        if self.is_timeout() {
            return DkError::Network(format!("request timed out: {self}"));
        }

        if self.is_connect() {
            return DkError::Network(format!("connection failure: {self}"));
        }

        if self.is_builder() {
            return DkError::Configuration(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return DkError::Network(format!("failed to read response body: {self}"));
        }

        DkError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_dk())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
