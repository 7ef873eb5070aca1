//! Request identifiers and random hex
//!
//! Request ids exist for tracing only. They are fresh on every call and are
//! not idempotency keys.

use chrono::Utc;
use dkpg_domain::constants::DEFAULT_REQUEST_ID_PREFIX;
use rand::rngs::OsRng;
use rand::RngCore;

/// `len` random bytes from the OS generator, lowercase hex encoded.
pub fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Id used by the token and key requests: `<epoch>-<16 hex>`.
pub fn auth_request_id() -> String {
    format!("{}-{}", Utc::now().timestamp(), random_hex(8))
}

/// General purpose id: `<PREFIX>_<epoch>_<12 hex>`.
pub fn generate_request_id(prefix: &str) -> String {
    format!("{prefix}_{}_{}", Utc::now().timestamp(), random_hex(6))
}

/// [`generate_request_id`] with the `REQ` prefix.
pub fn request_id() -> String {
    generate_request_id(DEFAULT_REQUEST_ID_PREFIX)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn test_auth_request_id_shape() {
        let id = auth_request_id();
        let (epoch, suffix) = id.split_once('-').unwrap();
        assert!(epoch.parse::<i64>().unwrap() > 1_600_000_000);
        assert_eq!(suffix.len(), 16);
        assert!(is_lower_hex(suffix));
    }

    #[test]
    fn test_prefixed_request_id_shape() {
        let id = generate_request_id("QR");
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "QR");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 12);
        assert!(is_lower_hex(parts[2]));
        assert!(request_id().starts_with("REQ_"));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let ids: HashSet<String> = (0..100).map(|_| auth_request_id()).collect();
        assert_eq!(ids.len(), 100);
    }
}
