//! Voice module - Requests and responses exchanged with the voice platform.
//!
//! These are the platform-neutral shapes the dispatcher works with. The wire
//! format lives in the CEK adapter.

pub mod messages;
mod request;
mod response;

pub use request::{IncomingRequest, Intent, RequestKind};
pub use response::OutgoingResponse;
