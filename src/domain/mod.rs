//! Domain layer - Pure business logic for the voice task skill.
//!
//! - `foundation` - identifiers and validation errors
//! - `voice` - platform-neutral requests and responses
//! - `orchestration` - status snapshots and side effects
//! - `dispatch` - the intent dispatcher

pub mod dispatch;
pub mod foundation;
pub mod orchestration;
pub mod voice;
