//! Axum router configuration for the voice endpoint.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{handle_voice_request, health, VoiceAppState};

/// Create the voice skill router.
///
/// # Routes
/// - `POST /api/voice` - Voice-platform webhook
/// - `POST /` - Same handler, for platforms configured with a bare host URL
/// - `GET /health` - Liveness probe
///
/// # Example
///
/// ```ignore
/// let app = voice_router().with_state(VoiceAppState::new(handler, "SignatureCEK"));
/// ```
pub fn voice_router() -> Router<VoiceAppState> {
    Router::new()
        .route("/", post(handle_voice_request))
        .route("/api/voice", post(handle_voice_request))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::cek::CekRequestClient;
    use crate::adapters::orchestration::InMemoryOrchestrationHost;
    use crate::application::handlers::voice::{HandleVoiceRequestHandler, VoiceRequestSettings};

    fn app() -> Router {
        let handler = HandleVoiceRequestHandler::new(
            Arc::new(CekRequestClient::without_verifier()),
            Arc::new(InMemoryOrchestrationHost::new()),
            VoiceRequestSettings {
                skip_validation: true,
                orchestration_name: "LongTimeOrchestration".to_string(),
            },
        );
        voice_router().with_state(VoiceAppState::new(Arc::new(handler), "SignatureCEK"))
    }

    fn intent_body(name: &str) -> String {
        json!({
            "version": "1.0",
            "session": { "sessionId": "s1", "new": false, "user": { "userId": "u1" } },
            "context": {},
            "request": { "type": "IntentRequest", "intent": { "name": name, "slots": {} } }
        })
        .to_string()
    }

    async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn unknown_intent_is_answered_on_both_paths() {
        for uri in ["/api/voice", "/"] {
            let (status, body) = post_json(app(), uri, intent_body("WeatherIntent")).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(
                body["response"]["outputSpeech"]["values"]["value"],
                "Sorry, I didn't understand that."
            );
            assert_eq!(body["response"]["shouldEndSession"], true);
        }
    }

    #[tokio::test]
    async fn garbage_body_is_bad_request() {
        let (status, body) = post_json(app(), "/api/voice", "not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_REQUEST");
    }

    #[tokio::test]
    async fn get_result_without_instance_is_not_found() {
        let (status, body) = post_json(app(), "/api/voice", intent_body("GetResultIntent")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "INSTANCE_NOT_FOUND");
    }
}
