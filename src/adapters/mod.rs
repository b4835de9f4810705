//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `cek` - Voice-platform request parsing and response envelope
//! - `signature` - Request signature verification
//! - `orchestration` - Orchestration hosts (in-process, durable HTTP)
//! - `task` - Task activities
//! - `http` - Inbound REST endpoint

pub mod cek;
pub mod http;
pub mod orchestration;
pub mod signature;
pub mod task;

pub use cek::CekRequestClient;
pub use orchestration::{DurableHttpConfig, DurableHttpHost, InMemoryOrchestrationHost};
pub use signature::HmacSignatureVerifier;
pub use task::DelayedTimestampActivity;
