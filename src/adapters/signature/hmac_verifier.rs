//! Shared-secret request signature verification.
//!
//! The signature header carries the hex-encoded HMAC-SHA256 of the raw body,
//! optionally prefixed with `sha256=`.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::ports::{RequestError, SignatureVerifier};

const SIGNATURE_PREFIX: &str = "sha256=";

/// Verifier for HMAC-SHA256 request signatures.
pub struct HmacSignatureVerifier {
    secret: Secret<String>,
}

impl HmacSignatureVerifier {
    /// Creates a new verifier with the given shared secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
        }
    }

    /// Computes the HMAC-SHA256 of the payload.
    fn compute_signature(&self, payload: &[u8]) -> Result<Vec<u8>, RequestError> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|_| RequestError::InvalidSignature)?;
        mac.update(payload);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

impl SignatureVerifier for HmacSignatureVerifier {
    fn verify(&self, signature: &str, body: &[u8]) -> Result<(), RequestError> {
        let encoded = signature.trim();
        let encoded = encoded.strip_prefix(SIGNATURE_PREFIX).unwrap_or(encoded);
        let provided = hex::decode(encoded).map_err(|_| RequestError::InvalidSignature)?;

        let expected = self.compute_signature(body)?;

        if !constant_time_compare(&expected, &provided) {
            tracing::warn!("Request signature mismatch");
            return Err(RequestError::InvalidSignature);
        }

        Ok(())
    }
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes a hex signature for use in test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, payload: &str) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
