//! Voice Task Skill - Voice assistant backend for long-running tasks
//!
//! A voice-platform webhook that starts a long-running task through an
//! orchestration host and reports its status when the user asks for the
//! result. Request dispatch is pure domain logic; parsing, signature checks
//! and the host sit behind ports.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
