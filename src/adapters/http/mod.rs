//! HTTP adapters - REST API implementations.

pub mod voice;

pub use voice::{voice_router, VoiceAppState};
