//! Voice Command Handlers
//!
//! ## Commands
//! - `HandleVoiceRequest` - Validate, dispatch and apply one platform request

mod handle_voice_request;

pub use handle_voice_request::{
    HandleVoiceRequestCommand, HandleVoiceRequestError, HandleVoiceRequestHandler,
    HandleVoiceRequestResult, VoiceRequestSettings,
};
