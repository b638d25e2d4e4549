use chrono::{DateTime, Utc};
use orderpulse_core::models::{OrderStatus, TrackedOrder};

/// Timestamp marking the order's entry into its current stage.
///
/// Each status walks a fixed fallback chain from the most specific
/// timestamp to more general ones, and yields `None` when the whole chain
/// is empty.
pub fn stage_entry_date(order: &TrackedOrder) -> Option<DateTime<Utc>> {
    match order.status {
        OrderStatus::PendingPayment => order.created_at,
        OrderStatus::PaymentConfirmed => order.payment_confirmed_at.or(order.created_at),
        OrderStatus::Processing => order
            .processing_started_at
            .or(order.payment_confirmed_at)
            .or(order.created_at),
        OrderStatus::ReadyToShip => order
            .ready_to_ship_at
            .or(order.processing_started_at)
            .or(order.created_at),
        OrderStatus::Shipped => order
            .shipped_at
            .or(order.ready_to_ship_at)
            .or(order.created_at),
        OrderStatus::FailedDelivery => order
            .failed_delivery_at
            .or(order.shipped_at)
            .or(order.created_at),
        OrderStatus::Delivered => order.delivered_at.or(order.shipped_at),
        OrderStatus::Cancelled => order.cancelled_at.or(order.created_at),
        OrderStatus::Unrecognized => order.created_at,
    }
}
