//! RequestClient port - Turns raw platform requests into domain requests.
//!
//! Implementations check the request signature (unless told to skip it) and
//! parse the body into an [`IncomingRequest`]. Signature failures must be
//! reported before any parsing side effects happen.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::voice::IncomingRequest;

/// Errors raised while validating or parsing a platform request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Missing request signature header")]
    MissingSignature,

    #[error("Request signature verification failed")]
    InvalidSignature,

    #[error("Malformed request: {0}")]
    Malformed(String),
}

impl RequestError {
    /// Returns true for authenticity failures (as opposed to bad payloads).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RequestError::MissingSignature | RequestError::InvalidSignature
        )
    }
}

/// Validates and parses inbound voice-platform requests.
#[async_trait]
pub trait RequestClient: Send + Sync {
    /// Validate `body` against `signature` and parse it.
    ///
    /// # Arguments
    ///
    /// * `signature` - Raw signature header value, if the header was present
    /// * `body` - Raw request body
    /// * `skip_validation` - When true, the signature is not checked at all
    ///
    /// # Errors
    ///
    /// * `RequestError::MissingSignature` - No header and validation enabled
    /// * `RequestError::InvalidSignature` - Header does not match the body
    /// * `RequestError::Malformed` - Body is not a valid platform request
    async fn parse(
        &self,
        signature: Option<&str>,
        body: &[u8],
        skip_validation: bool,
    ) -> Result<IncomingRequest, RequestError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_errors_are_rejections() {
        assert!(RequestError::MissingSignature.is_rejection());
        assert!(RequestError::InvalidSignature.is_rejection());
        assert!(!RequestError::Malformed("bad json".to_string()).is_rejection());
    }

    #[test]
    fn request_client_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RequestClient>();
    }
}
