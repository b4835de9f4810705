//! CEK wire types.
//!
//! Only the fields the skill reads are modelled; everything else in the
//! request is ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::UserId;
use crate::domain::voice::{IncomingRequest, Intent, OutgoingResponse, RequestKind};
use crate::ports::RequestError;

/// Response envelope version the platform expects.
pub const RESPONSE_VERSION: &str = "0.1.0";

/// Language tag attached to every speech segment.
pub const SPEECH_LANG: &str = "en";

// ════════════════════════════════════════════════════════════════════════════════
// Request
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CekRequest {
    #[serde(default)]
    pub version: Option<String>,
    pub session: CekSession,
    #[serde(default)]
    pub context: Value,
    pub request: CekRequestBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CekSession {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_attributes: Option<Map<String, Value>>,
    pub user: CekUser,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CekUser {
    pub user_id: String,
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CekRequestBody {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub intent: Option<CekIntent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CekIntent {
    pub name: String,
    #[serde(default)]
    pub slots: Option<Value>,
}

impl CekRequest {
    /// Converts the wire request into a domain request.
    ///
    /// Unknown request types become `RequestKind::Unrecognized`; only a
    /// missing user id or an intent request without an intent is rejected.
    pub fn into_domain(self) -> Result<IncomingRequest, RequestError> {
        let user_id = UserId::new(self.session.user.user_id)
            .map_err(|e| RequestError::Malformed(e.to_string()))?;

        let kind = match self.request.request_type.as_str() {
            "LaunchRequest" => RequestKind::Launch,
            "IntentRequest" => {
                let intent = self.request.intent.ok_or_else(|| {
                    RequestError::Malformed("IntentRequest without intent".to_string())
                })?;
                RequestKind::Intent(Intent::from_name(&intent.name))
            }
            "SessionEndedRequest" => RequestKind::SessionEnded,
            other => RequestKind::Unrecognized(other.to_string()),
        };

        Ok(IncomingRequest::new(user_id, kind))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CekResponse {
    pub version: String,
    pub session_attributes: Map<String, Value>,
    pub response: CekResponseBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CekResponseBody {
    pub output_speech: OutputSpeech,
    pub card: Map<String, Value>,
    pub directives: Vec<Value>,
    pub should_end_session: bool,
}

/// Speech output; a single segment is sent as `SimpleSpeech`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    SimpleSpeech { values: SpeechInfo },
    SpeechList { values: Vec<SpeechInfo> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeechInfo {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub lang: String,
    pub value: String,
}

impl SpeechInfo {
    pub fn plain_text(value: impl Into<String>) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            lang: SPEECH_LANG.to_string(),
            value: value.into(),
        }
    }
}

impl From<&OutgoingResponse> for CekResponse {
    fn from(response: &OutgoingResponse) -> Self {
        let output_speech = match response.segments() {
            [single] => OutputSpeech::SimpleSpeech {
                values: SpeechInfo::plain_text(single.as_str()),
            },
            segments => OutputSpeech::SpeechList {
                values: segments
                    .iter()
                    .map(|s| SpeechInfo::plain_text(s.as_str()))
                    .collect(),
            },
        };

        Self {
            version: RESPONSE_VERSION.to_string(),
            session_attributes: Map::new(),
            response: CekResponseBody {
                output_speech,
                card: Map::new(),
                directives: Vec::new(),
                should_end_session: response.should_end_session(),
            },
        }
    }
}
