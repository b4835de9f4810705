//! Orchestration module - What the skill knows about background tasks.
//!
//! The orchestration host owns the instances; the domain only sees read-only
//! status snapshots and asks for side effects through [`Effect`].

mod effect;
mod status;

pub use effect::Effect;
pub use status::{OrchestrationSnapshot, OrchestrationStatus};
