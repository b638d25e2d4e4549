//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with an `event` field taken from
//! [`names`], so log pipelines can match on it.

/// Event names as constants for programmatic use.
pub mod names {
    pub const SLA_BATCH_EVALUATED: &str = "sla_batch_evaluated";
    pub const SLA_BREACHED: &str = "sla_breached";
    pub const INSIGHTS_GROUPED: &str = "insights_grouped";
    pub const ALERT_SNOOZED: &str = "alert_snoozed";
    pub const THROTTLE_STATE_RESET: &str = "throttle_state_reset";
    pub const PERSISTENCE_DEGRADED: &str = "persistence_degraded";
}

/// Log the outcome of a batch SLA evaluation.
pub fn sla_batch_evaluated(total: usize, at_risk: usize, breached: usize) {
    tracing::info!(
        event = names::SLA_BATCH_EVALUATED,
        total = total,
        at_risk = at_risk,
        breached = breached,
        "SLA batch evaluated"
    );
}

/// Log a single breached order.
pub fn sla_breached(order_id: &str, status: &str, days_in_stage: u32, expected_days: u32) {
    tracing::debug!(
        event = names::SLA_BREACHED,
        order_id = %order_id,
        status = %status,
        days_in_stage = days_in_stage,
        expected_days = expected_days,
        "order breached SLA"
    );
}

/// Log a grouping pass over a batch of insights.
pub fn insights_grouped(items: usize, entries: usize, critical: usize, throttled: usize) {
    tracing::debug!(
        event = names::INSIGHTS_GROUPED,
        items = items,
        entries = entries,
        critical = critical,
        throttled = throttled,
        "insights grouped"
    );
}

/// Log a user snooze.
pub fn alert_snoozed(key: &str, hours: u32) {
    tracing::info!(
        event = names::ALERT_SNOOZED,
        key = %key,
        hours = hours,
        "alert type snoozed"
    );
}

/// Log a bulk reset of snoozes or throttle history.
pub fn throttle_state_reset(scope: &str, entries: usize) {
    tracing::info!(
        event = names::THROTTLE_STATE_RESET,
        scope = %scope,
        entries = entries,
        "throttle state reset"
    );
}

/// Log a persistence failure that was absorbed by falling back to memory.
pub fn persistence_degraded(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = names::PERSISTENCE_DEGRADED,
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "persistence degraded"
    );
}
