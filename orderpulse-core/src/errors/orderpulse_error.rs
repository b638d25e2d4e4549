use super::{ConfigError, OrderError, PersistenceError};

/// Umbrella error for the workspace. Aggregates subsystem errors via `From`.
#[derive(Debug, thiserror::Error)]
pub enum OrderPulseError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("order error: {0}")]
    Order(#[from] OrderError),

    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

pub type OrderPulseResult<T> = Result<T, OrderPulseError>;
