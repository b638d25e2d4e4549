//! # orderpulse-alerts
//!
//! Display filtering for alert-like insights:
//! - alert-type registry with explicit sensitivity
//! - critical bypass (immediate urgency or large amount at risk)
//! - throttle store with cooldowns and snoozes, persisted through a
//!   pluggable key-value backend (memory, JSON files, SQLite)
//! - category grouping that collapses large buckets into a summary entry

pub mod backends;
pub mod critical;
pub mod grouping;
pub mod registry;
pub mod throttle;

pub use critical::CriticalPolicy;
pub use grouping::{GroupOutcome, InsightGrouper};
pub use registry::{AlertTypeDef, AlertTypeRegistry};
pub use throttle::{CooldownPolicy, ThrottleStore};
