//! Signature Adapters
//!
//! Implementations of the SignatureVerifier port.

mod hmac_verifier;

pub use hmac_verifier::HmacSignatureVerifier;
