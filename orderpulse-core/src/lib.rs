//! # orderpulse-core
//!
//! Foundation crate for the OrderPulse order SLA and alerting layer.
//! Defines the order and insight models, the persisted throttle record,
//! the storage and evaluator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::OrderPulseConfig;
pub use errors::{OrderPulseError, OrderPulseResult};
pub use models::{
    GroupedInsight, Insight, OrderStatus, Sensitivity, SlaResult, SlaStatus, ThrottleRecord,
    TrackedOrder, Urgency,
};
