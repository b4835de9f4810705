//! HTTP handlers for the voice endpoint.
//!
//! These handlers connect Axum routes to the application-layer voice handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::adapters::cek::CekResponse;
use crate::application::handlers::voice::{
    HandleVoiceRequestCommand, HandleVoiceRequestError, HandleVoiceRequestHandler,
};
use crate::domain::dispatch::DispatchError;
use crate::ports::{HostError, RequestError};

use super::dto::{ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the voice routes.
#[derive(Clone)]
pub struct VoiceAppState {
    pub handler: Arc<HandleVoiceRequestHandler>,
    /// Header carrying the request signature
    pub signature_header: String,
}

impl VoiceAppState {
    pub fn new(handler: Arc<HandleVoiceRequestHandler>, signature_header: impl Into<String>) -> Self {
        Self {
            handler,
            signature_header: signature_header.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/voice - Handle a voice-platform request
pub async fn handle_voice_request(
    State(state): State<VoiceAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, VoiceApiError> {
    let signature = headers
        .get(state.signature_header.as_str())
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let cmd = HandleVoiceRequestCommand {
        signature,
        body: body.to_vec(),
    };

    let result = state.handler.handle(cmd).await?;

    Ok(Json(CekResponse::from(&result.response)))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts handler errors to HTTP responses.
#[derive(Debug)]
pub struct VoiceApiError(HandleVoiceRequestError);

impl From<HandleVoiceRequestError> for VoiceApiError {
    fn from(err: HandleVoiceRequestError) -> Self {
        Self(err)
    }
}

impl VoiceApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            HandleVoiceRequestError::Request(err) if err.is_rejection() => {
                let code = match err {
                    RequestError::MissingSignature => "MISSING_SIGNATURE",
                    _ => "INVALID_SIGNATURE",
                };
                (StatusCode::UNAUTHORIZED, code)
            }
            HandleVoiceRequestError::Request(_) => (StatusCode::BAD_REQUEST, "MALFORMED_REQUEST"),
            HandleVoiceRequestError::Host(HostError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "INSTANCE_NOT_FOUND")
            }
            HandleVoiceRequestError::Host(_) => (StatusCode::BAD_GATEWAY, "HOST_ERROR"),
            HandleVoiceRequestError::Dispatch(DispatchError::StatusUnavailable(_)) => {
                (StatusCode::BAD_GATEWAY, "STATUS_UNAVAILABLE")
            }
        }
    }
}

impl IntoResponse for VoiceApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Voice request failed");
        } else {
            tracing::warn!(error = %self.0, "Voice request rejected");
        }

        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}
