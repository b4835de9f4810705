//! HTTP adapter for the voice skill endpoint.
//!
//! Exposes the skill over REST:
//! - `POST /api/voice` - Handle a voice-platform request (also `POST /`)
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse};
pub use handlers::{VoiceApiError, VoiceAppState};
pub use routes::voice_router;
