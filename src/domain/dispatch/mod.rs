//! Dispatch module - Maps voice requests to responses and host effects.
//!
//! The dispatcher is pure: it never talks to the orchestration host. The
//! caller asks [`IntentDispatcher::status_query`] which instance it must look
//! up, feeds the snapshot into [`IntentDispatcher::decide`], then applies the
//! returned [`Effect`](crate::domain::orchestration::Effect).

mod dispatcher;
mod errors;

pub use dispatcher::{Decision, IntentDispatcher};
pub use errors::DispatchError;
