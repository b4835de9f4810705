//! Application layer - Commands, Handlers and Orchestrations.
//!
//! This layer coordinates the dispatcher with the ports: it parses requests
//! through the `RequestClient`, feeds orchestration status into the
//! dispatcher and applies the resulting effect against the host.

pub mod handlers;
pub mod orchestrations;

pub use handlers::{
    HandleVoiceRequestCommand, HandleVoiceRequestError, HandleVoiceRequestHandler,
    HandleVoiceRequestResult, VoiceRequestSettings,
};
pub use orchestrations::LongTimeOrchestration;
