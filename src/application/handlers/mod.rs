//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod voice;

pub use voice::{
    HandleVoiceRequestCommand, HandleVoiceRequestError, HandleVoiceRequestHandler,
    HandleVoiceRequestResult, VoiceRequestSettings,
};
