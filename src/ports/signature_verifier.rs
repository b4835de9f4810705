//! SignatureVerifier port - Checks that a request body came from the platform.

use super::RequestError;

/// Verifies a signature header against the raw request body.
///
/// # Contract
///
/// - Return `RequestError::InvalidSignature` for any mismatch or undecodable
///   signature
/// - Never panic on attacker-controlled input
pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, signature: &str, body: &[u8]) -> Result<(), RequestError>;
}
