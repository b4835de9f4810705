//! CekRequestClient - RequestClient implementation for CEK requests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::voice::IncomingRequest;
use crate::ports::{RequestClient, RequestError, SignatureVerifier};

use super::wire::CekRequest;

/// Validates signatures with a [`SignatureVerifier`] and parses CEK JSON.
pub struct CekRequestClient {
    verifier: Option<Arc<dyn SignatureVerifier>>,
}

impl CekRequestClient {
    /// Creates a client that verifies signatures with `verifier`.
    pub fn new(verifier: Arc<dyn SignatureVerifier>) -> Self {
        Self {
            verifier: Some(verifier),
        }
    }

    /// Creates a client with no verifier.
    ///
    /// Such a client only accepts requests when validation is skipped.
    pub fn without_verifier() -> Self {
        Self { verifier: None }
    }

    fn verify(&self, signature: Option<&str>, body: &[u8]) -> Result<(), RequestError> {
        let signature = signature
            .filter(|s| !s.trim().is_empty())
            .ok_or(RequestError::MissingSignature)?;

        match &self.verifier {
            Some(verifier) => verifier.verify(signature, body),
            None => {
                tracing::error!("Request validation requested but no signature verifier configured");
                Err(RequestError::InvalidSignature)
            }
        }
    }
}

#[async_trait]
impl RequestClient for CekRequestClient {
    async fn parse(
        &self,
        signature: Option<&str>,
        body: &[u8],
        skip_validation: bool,
    ) -> Result<IncomingRequest, RequestError> {
        if skip_validation {
            tracing::debug!("Skipping request signature validation");
        } else {
            self.verify(signature, body)?;
        }

        let request: CekRequest =
            serde_json::from_slice(body).map_err(|e| RequestError::Malformed(e.to_string()))?;

        request.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::RequestKind;

    const LAUNCH_BODY: &str =
        r#"{"session":{"user":{"userId":"u1"}},"request":{"type":"LaunchRequest"}}"#;

    /// Accepts exactly one signature value
    struct FixedVerifier(&'static str);

    impl SignatureVerifier for FixedVerifier {
        fn verify(&self, signature: &str, _body: &[u8]) -> Result<(), RequestError> {
            if signature == self.0 {
                Ok(())
            } else {
                Err(RequestError::InvalidSignature)
            }
        }
    }

    fn client() -> CekRequestClient {
        CekRequestClient::new(Arc::new(FixedVerifier("good")))
    }

    #[tokio::test]
    async fn parses_with_valid_signature() {
        let request = client()
            .parse(Some("good"), LAUNCH_BODY.as_bytes(), false)
            .await
            .unwrap();

        assert_eq!(request.kind(), &RequestKind::Launch);
        assert_eq!(request.user_id().as_str(), "u1");
    }

    #[tokio::test]
    async fn rejects_invalid_signature() {
        let result = client().parse(Some("bad"), LAUNCH_BODY.as_bytes(), false).await;
        assert_eq!(result, Err(RequestError::InvalidSignature));
    }

    #[tokio::test]
    async fn rejects_missing_signature() {
        let result = client().parse(None, LAUNCH_BODY.as_bytes(), false).await;
        assert_eq!(result, Err(RequestError::MissingSignature));

        let result = client().parse(Some("  "), LAUNCH_BODY.as_bytes(), false).await;
        assert_eq!(result, Err(RequestError::MissingSignature));
    }

    #[tokio::test]
    async fn skip_validation_ignores_signature() {
        let result = client().parse(Some("bad"), LAUNCH_BODY.as_bytes(), true).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn signature_is_checked_before_body_is_parsed() {
        let result = client().parse(Some("bad"), b"not json", false).await;
        assert_eq!(result, Err(RequestError::InvalidSignature));
    }

    #[tokio::test]
    async fn malformed_body_is_reported() {
        let result = client().parse(Some("good"), b"not json", false).await;
        assert!(matches!(result, Err(RequestError::Malformed(_))));
    }

    #[tokio::test]
    async fn client_without_verifier_fails_closed() {
        let client = CekRequestClient::without_verifier();

        let result = client.parse(Some("anything"), LAUNCH_BODY.as_bytes(), false).await;
        assert_eq!(result, Err(RequestError::InvalidSignature));

        let result = client.parse(None, LAUNCH_BODY.as_bytes(), true).await;
        assert!(result.is_ok());
    }
}
