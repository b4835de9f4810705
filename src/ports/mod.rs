//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Inbound Ports
//!
//! - `RequestClient` - Validates and parses voice-platform requests
//! - `SignatureVerifier` - Checks request authenticity
//!
//! ## Orchestration Ports
//!
//! - `OrchestrationHost` - Starts, inspects and terminates instances
//! - `Orchestration` / `TaskActivity` - Work the host executes

mod orchestration_host;
mod request_client;
mod signature_verifier;
mod task;

pub use orchestration_host::{HostError, OrchestrationHost};
pub use request_client::{RequestClient, RequestError};
pub use signature_verifier::SignatureVerifier;
pub use task::{Orchestration, TaskActivity, TaskError};
