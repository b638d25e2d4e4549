use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// What to do when an order's stage-entry timestamp cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEntryPolicy {
    /// Treat the order as having just entered the stage (0 days, never breached).
    #[default]
    AssumeJustEntered,
    /// Classify the order as `unknown` so it surfaces for attention.
    FlagUnknown,
}

/// SLA evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaConfig {
    /// Expected days for statuses with no threshold entry.
    pub fallback_days: u32,
    /// Fraction of the expected days at which an order becomes at-risk.
    pub at_risk_ratio: f64,
    pub missing_entry_policy: MissingEntryPolicy,
    /// Per-status threshold overrides (days). Key is the status wire name.
    pub thresholds: BTreeMap<String, u32>,
}

impl Default for SlaConfig {
    fn default() -> Self {
        Self {
            fallback_days: defaults::DEFAULT_SLA_FALLBACK_DAYS,
            at_risk_ratio: defaults::DEFAULT_AT_RISK_RATIO,
            missing_entry_policy: MissingEntryPolicy::default(),
            thresholds: BTreeMap::new(),
        }
    }
}
