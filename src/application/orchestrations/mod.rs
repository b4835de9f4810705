//! Orchestrations registered with the orchestration host.

mod long_time;

pub use long_time::LongTimeOrchestration;
