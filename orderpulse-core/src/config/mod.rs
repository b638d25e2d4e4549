//! Configuration system for OrderPulse.
//! TOML-based, layered: env > project file > compiled defaults.

pub mod alert_config;
pub mod defaults;
pub mod observability_config;
pub mod orderpulse_config;
pub mod sla_config;

pub use alert_config::{AlertConfig, StoreBackendKind};
pub use observability_config::ObservabilityConfig;
pub use orderpulse_config::{check_days, OrderPulseConfig};
pub use sla_config::{MissingEntryPolicy, SlaConfig};
