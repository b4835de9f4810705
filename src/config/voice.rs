//! Voice platform configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for accepting requests from the voice platform
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceConfig {
    /// Accept requests without checking their signature (local testing only)
    #[serde(default)]
    pub skip_request_validation: bool,

    /// Header carrying the request signature
    #[serde(default = "default_signature_header")]
    pub signature_header: String,

    /// Shared secret used to verify request signatures
    pub signature_secret: Option<String>,
}

impl VoiceConfig {
    /// Check if a signature secret is configured
    pub fn has_signature_secret(&self) -> bool {
        self.signature_secret
            .as_ref()
            .is_some_and(|s| !s.is_empty())
    }

    /// Validate voice configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.signature_header.trim().is_empty() {
            return Err(ValidationError::MissingRequired("VOICE__SIGNATURE_HEADER"));
        }
        // Validation on means we need something to validate with
        if !self.skip_request_validation && !self.has_signature_secret() {
            return Err(ValidationError::MissingRequired("VOICE__SIGNATURE_SECRET"));
        }
        Ok(())
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            skip_request_validation: false,
            signature_header: default_signature_header(),
            signature_secret: None,
        }
    }
}

fn default_signature_header() -> String {
    "SignatureCEK".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_config_defaults() {
        let config = VoiceConfig::default();
        assert!(!config.skip_request_validation);
        assert_eq!(config.signature_header, "SignatureCEK");
        assert!(!config.has_signature_secret());
    }

    #[test]
    fn test_validation_requires_secret_when_validating() {
        let config = VoiceConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("VOICE__SIGNATURE_SECRET"))
        ));
    }

    #[test]
    fn test_validation_passes_when_skipping() {
        let config = VoiceConfig {
            skip_request_validation: true,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let config = VoiceConfig {
            signature_secret: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_voice_config_deserialization() {
        let json = r#"{"skip_request_validation": true, "signature_secret": "s3cret"}"#;
        let config: VoiceConfig = serde_json::from_str(json).unwrap();
        assert!(config.skip_request_validation);
        assert!(config.has_signature_secret());
        assert_eq!(config.signature_header, "SignatureCEK");
    }
}
