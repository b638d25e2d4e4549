//! Error handling for OrderPulse.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod order_error;
pub mod orderpulse_error;
pub mod persistence_error;

pub use config_error::ConfigError;
pub use order_error::OrderError;
pub use orderpulse_error::{OrderPulseError, OrderPulseResult};
pub use persistence_error::PersistenceError;
