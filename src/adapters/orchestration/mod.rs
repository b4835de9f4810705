//! Orchestration Host Adapters
//!
//! Implementations of the OrchestrationHost port.
//!
//! ## Available Adapters
//!
//! - **InMemoryOrchestrationHost** - Runs orchestrations as tokio tasks in this
//!   process (development/testing, not durable)
//! - **DurableHttpHost** - Talks to an external durable-task host over its
//!   HTTP webhook API
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::orchestration::{DurableHttpConfig, DurableHttpHost, InMemoryOrchestrationHost};
//!
//! // Production: external durable host
//! let host = DurableHttpHost::new(DurableHttpConfig::new("http://localhost:7071/runtime/webhooks/durabletask"))?;
//!
//! // Development: in-process host
//! let host = InMemoryOrchestrationHost::new().with_orchestration(orchestration);
//! ```

mod durable_http;
mod in_memory;

pub use durable_http::{DurableHttpConfig, DurableHttpHost};
pub use in_memory::InMemoryOrchestrationHost;
