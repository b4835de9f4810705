//! Task Adapters
//!
//! Implementations of the TaskActivity port.

mod delayed_timestamp;

pub use delayed_timestamp::{format_timestamp, DelayedTimestampActivity};
