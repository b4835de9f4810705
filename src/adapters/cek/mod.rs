//! CEK Adapters
//!
//! Speaks the Clova Extension Kit JSON format: parses platform requests into
//! domain requests and renders domain responses into the platform envelope.

mod client;
mod wire;

pub use client::CekRequestClient;
pub use wire::{
    CekIntent, CekRequest, CekRequestBody, CekResponse, CekResponseBody, CekSession, CekUser,
    OutputSpeech, SpeechInfo,
};
