use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// SLA classification of an order's current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SlaStatus {
    OnTrack,
    AtRisk,
    Breached,
    /// No stage-entry time could be resolved. Only produced under the
    /// `flag_unknown` missing-entry policy.
    Unknown,
}

/// Derived SLA view of one order. Recomputed on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SlaResult {
    pub status: SlaStatus,
    /// Whole days in the current stage. Drives classification.
    pub days_in_stage: u32,
    /// Whole hours in the current stage. Display only.
    pub hours_in_stage: u32,
    pub expected_days: u32,
    pub reason: String,
}

impl SlaResult {
    pub fn is_breached(&self) -> bool {
        self.status == SlaStatus::Breached
    }

    pub fn needs_attention(&self) -> bool {
        matches!(
            self.status,
            SlaStatus::AtRisk | SlaStatus::Breached | SlaStatus::Unknown
        )
    }
}
