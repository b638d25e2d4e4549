use chrono::{DateTime, Utc};
use orderpulse_core::config::{MissingEntryPolicy, SlaConfig};
use orderpulse_core::errors::ConfigError;
use orderpulse_core::models::{OrderStatus, SlaResult, SlaStatus, TrackedOrder};

use crate::stage_clock::stage_entry_date;
use crate::thresholds::SlaThresholdTable;

/// Parameters of one SLA evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct SlaRules {
    pub thresholds: SlaThresholdTable,
    /// Fraction of the expected days at which an order becomes at-risk.
    pub at_risk_ratio: f64,
    pub missing_entry_policy: MissingEntryPolicy,
}

impl SlaRules {
    pub fn from_config(config: &SlaConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            thresholds: SlaThresholdTable::from_config(config)?,
            at_risk_ratio: config.at_risk_ratio,
            missing_entry_policy: config.missing_entry_policy,
        })
    }
}

impl Default for SlaRules {
    fn default() -> Self {
        let config = SlaConfig::default();
        Self {
            thresholds: SlaThresholdTable::default(),
            at_risk_ratio: config.at_risk_ratio,
            missing_entry_policy: config.missing_entry_policy,
        }
    }
}

/// Evaluate the SLA of `order` at instant `now`.
///
/// Terminal orders short-circuit to on-track with zero elapsed time, however
/// old their timestamps are. Classification uses whole days only; the hour
/// count is carried for display.
pub fn evaluate(order: &TrackedOrder, rules: &SlaRules, now: DateTime<Utc>) -> SlaResult {
    if order.status.is_terminal() {
        return terminal_result(order.status);
    }

    let expected_days = rules.thresholds.expected_days(order.status);
    let label = order.status.label();

    let (days_in_stage, hours_in_stage) = match stage_entry_date(order) {
        Some(entered) => elapsed(entered, now),
        None => match rules.missing_entry_policy {
            MissingEntryPolicy::AssumeJustEntered => (0, 0),
            MissingEntryPolicy::FlagUnknown => {
                return SlaResult {
                    status: SlaStatus::Unknown,
                    days_in_stage: 0,
                    hours_in_stage: 0,
                    expected_days,
                    reason: format!("No entry time recorded for {label}"),
                };
            }
        },
    };

    let status = classify(days_in_stage, expected_days, rules.at_risk_ratio);
    let reason = match status {
        SlaStatus::Breached => format!(
            "{days_in_stage} {} in {label} (expected {expected_days})",
            plural_days(days_in_stage)
        ),
        SlaStatus::AtRisk => {
            format!("{days_in_stage} of {expected_days} days used — action needed soon")
        }
        _ => {
            let remaining = expected_days.saturating_sub(days_in_stage);
            format!("{remaining} {} remaining", plural_days(remaining))
        }
    };

    SlaResult {
        status,
        days_in_stage,
        hours_in_stage,
        expected_days,
        reason,
    }
}

/// Three-way classification of elapsed days against the expected days.
pub fn classify(days_in_stage: u32, expected_days: u32, at_risk_ratio: f64) -> SlaStatus {
    if days_in_stage > expected_days {
        return SlaStatus::Breached;
    }
    if expected_days == 0 {
        // Only reachable with a hand-built table; a zero budget is fully used.
        return SlaStatus::AtRisk;
    }
    if days_in_stage as f64 / expected_days as f64 >= at_risk_ratio {
        SlaStatus::AtRisk
    } else {
        SlaStatus::OnTrack
    }
}

/// Whole days and whole hours from `entered` to `now`. Future timestamps
/// (clock skew) read as zero.
pub fn elapsed(entered: DateTime<Utc>, now: DateTime<Utc>) -> (u32, u32) {
    let delta = now - entered;
    let days = u32::try_from(delta.num_days().max(0)).unwrap_or(u32::MAX);
    let hours = u32::try_from(delta.num_hours().max(0)).unwrap_or(u32::MAX);
    (days, hours)
}

fn terminal_result(status: OrderStatus) -> SlaResult {
    let reason = match status {
        OrderStatus::Cancelled => "Order cancelled",
        _ => "Order completed",
    };
    SlaResult {
        status: SlaStatus::OnTrack,
        days_in_stage: 0,
        hours_in_stage: 0,
        expected_days: 0,
        reason: reason.to_string(),
    }
}

fn plural_days(n: u32) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}
