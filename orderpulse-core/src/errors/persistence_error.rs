/// Throttle-state persistence errors. Never surfaced past the throttle
/// store, which logs them and keeps working in memory.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("corrupt throttle state under key {key}: {message}")]
    Corrupt { key: String, message: String },

    #[error("failed to serialize throttle state: {message}")]
    Serialize { message: String },
}
