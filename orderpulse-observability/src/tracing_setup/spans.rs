//! Span definitions per operation.

/// Create an SLA batch evaluation span.
#[macro_export]
macro_rules! sla_batch_span {
    ($order_count:expr) => {
        tracing::info_span!("orderpulse.sla_batch", order_count = $order_count)
    };
}

/// Create an insight grouping span.
#[macro_export]
macro_rules! grouping_span {
    ($item_count:expr) => {
        tracing::info_span!("orderpulse.grouping", item_count = $item_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SLA_BATCH: &str = "orderpulse.sla_batch";
    pub const GROUPING: &str = "orderpulse.grouping";
}
