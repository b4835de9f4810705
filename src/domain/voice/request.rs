//! Parsed voice-platform request.

use std::fmt;

use crate::domain::foundation::{InstanceId, UserId};

/// Intent name the platform sends when the user asks for the task result.
pub const GET_RESULT_INTENT: &str = "GetResultIntent";

/// Closed set of intents this skill understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Intent {
    /// The user asks how the long-running task is doing.
    GetResult,
    /// Any intent name the skill has no handler for.
    Other(String),
}

impl Intent {
    /// Classifies a raw intent name.
    pub fn from_name(name: &str) -> Self {
        match name {
            GET_RESULT_INTENT => Intent::GetResult,
            other => Intent::Other(other.to_string()),
        }
    }

    /// Returns the platform intent name.
    pub fn name(&self) -> &str {
        match self {
            Intent::GetResult => GET_RESULT_INTENT,
            Intent::Other(name) => name,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Kind of request received from the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// The user opened the skill.
    Launch,
    /// The user said something the platform classified into an intent.
    Intent(Intent),
    /// The platform closed the session.
    SessionEnded,
    /// A request type this skill does not know; carries the raw type.
    Unrecognized(String),
}

impl RequestKind {
    /// Short label used in logs.
    pub fn label(&self) -> &str {
        match self {
            RequestKind::Launch => "launch",
            RequestKind::Intent(_) => "intent",
            RequestKind::SessionEnded => "session_ended",
            RequestKind::Unrecognized(_) => "unrecognized",
        }
    }
}

/// A structured request, immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IncomingRequest {
    user_id: UserId,
    kind: RequestKind,
}

impl IncomingRequest {
    pub fn new(user_id: UserId, kind: RequestKind) -> Self {
        Self { user_id, kind }
    }

    pub fn launch(user_id: UserId) -> Self {
        Self::new(user_id, RequestKind::Launch)
    }

    pub fn intent(user_id: UserId, intent: Intent) -> Self {
        Self::new(user_id, RequestKind::Intent(intent))
    }

    pub fn session_ended(user_id: UserId) -> Self {
        Self::new(user_id, RequestKind::SessionEnded)
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn kind(&self) -> &RequestKind {
        &self.kind
    }

    /// The orchestration instance this request's user owns.
    pub fn instance_id(&self) -> InstanceId {
        InstanceId::from(&self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("u1").unwrap()
    }

    #[test]
    fn get_result_intent_name_is_recognized() {
        assert_eq!(Intent::from_name("GetResultIntent"), Intent::GetResult);
    }

    #[test]
    fn intent_names_are_case_sensitive() {
        assert_eq!(
            Intent::from_name("getresultintent"),
            Intent::Other("getresultintent".to_string())
        );
    }

    #[test]
    fn other_intent_keeps_its_name() {
        let intent = Intent::from_name("Clova.GuideIntent");
        assert_eq!(intent.name(), "Clova.GuideIntent");
        assert_eq!(format!("{}", intent), "Clova.GuideIntent");
    }

    #[test]
    fn instance_id_follows_user_id() {
        let request = IncomingRequest::launch(user());
        assert_eq!(request.instance_id().as_str(), "u1");
    }

    #[test]
    fn kind_labels_are_stable() {
        assert_eq!(RequestKind::Launch.label(), "launch");
        assert_eq!(RequestKind::Intent(Intent::GetResult).label(), "intent");
        assert_eq!(RequestKind::SessionEnded.label(), "session_ended");
        assert_eq!(
            RequestKind::Unrecognized("EventRequest".to_string()).label(),
            "unrecognized"
        );
    }
}
