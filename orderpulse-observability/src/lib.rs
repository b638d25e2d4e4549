//! # orderpulse-observability
//!
//! Subscriber setup and structured log events shared by the SLA and alert crates.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
