use std::collections::HashMap;
use std::str::FromStr;

use orderpulse_core::config::{check_days, defaults, SlaConfig};
use orderpulse_core::constants::MAX_EXPECTED_DAYS;
use orderpulse_core::errors::ConfigError;
use orderpulse_core::models::OrderStatus;

/// Built-in expected days per status. `None` means "use the fallback";
/// terminal statuses have no obligation.
pub fn default_expected_days(status: OrderStatus) -> Option<u32> {
    match status {
        OrderStatus::PendingPayment => Some(defaults::DEFAULT_PENDING_PAYMENT_DAYS),
        OrderStatus::PaymentConfirmed => Some(defaults::DEFAULT_PAYMENT_CONFIRMED_DAYS),
        OrderStatus::Processing => Some(defaults::DEFAULT_PROCESSING_DAYS),
        OrderStatus::ReadyToShip => Some(defaults::DEFAULT_READY_TO_SHIP_DAYS),
        OrderStatus::Shipped => Some(defaults::DEFAULT_SHIPPED_DAYS),
        OrderStatus::FailedDelivery | OrderStatus::Unrecognized => None,
        OrderStatus::Delivered | OrderStatus::Cancelled => None,
    }
}

/// Status → expected days in stage, with a fallback for unlisted statuses.
///
/// Every entry is kept within `1..=MAX_EXPECTED_DAYS` so the urgency bands
/// cannot overlap. Builder methods clamp; `from_config` rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlaThresholdTable {
    days: HashMap<OrderStatus, u32>,
    fallback_days: u32,
}

impl SlaThresholdTable {
    /// Empty table: every status resolves to `fallback_days`.
    pub fn empty(fallback_days: u32) -> Self {
        Self {
            days: HashMap::new(),
            fallback_days: clamp_days(fallback_days),
        }
    }

    /// The built-in table with the given fallback.
    pub fn builtin(fallback_days: u32) -> Self {
        let days = OrderStatus::ALL
            .into_iter()
            .filter_map(|status| default_expected_days(status).map(|d| (status, d)))
            .collect();
        Self {
            days,
            fallback_days: clamp_days(fallback_days),
        }
    }

    /// Built-in table with config overrides applied on top.
    pub fn from_config(config: &SlaConfig) -> Result<Self, ConfigError> {
        check_days("sla.fallback_days", config.fallback_days)?;
        let mut table = Self::builtin(config.fallback_days);
        for (name, days) in &config.thresholds {
            check_days(&format!("sla.thresholds.{name}"), *days)?;
            let status = OrderStatus::from_str(name).map_err(|e| ConfigError::ValidationFailed {
                field: format!("sla.thresholds.{name}"),
                message: e.to_string(),
            })?;
            table.days.insert(status, *days);
        }
        Ok(table)
    }

    pub fn with_threshold(mut self, status: OrderStatus, days: u32) -> Self {
        self.days.insert(status, clamp_days(days));
        self
    }

    pub fn expected_days(&self, status: OrderStatus) -> u32 {
        self.days
            .get(&status)
            .copied()
            .unwrap_or(self.fallback_days)
    }

    pub fn fallback_days(&self) -> u32 {
        self.fallback_days
    }
}

fn clamp_days(days: u32) -> u32 {
    days.clamp(1, MAX_EXPECTED_DAYS)
}

impl Default for SlaThresholdTable {
    fn default() -> Self {
        Self::builtin(defaults::DEFAULT_SLA_FALLBACK_DAYS)
    }
}
