/// Errors raised while reading order records.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("unknown order status: {status}")]
    UnknownStatus { status: String },

    #[error("invalid order record: {reason}")]
    InvalidRecord { reason: String },
}
