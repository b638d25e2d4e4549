use chrono::{DateTime, Utc};

use crate::models::{SlaResult, TrackedOrder};

/// SLA classification of an order's current stage.
///
/// Evaluation is total: every order snapshot yields a result.
pub trait ISlaEvaluator: Send + Sync {
    /// Evaluate against an explicit wall-clock instant.
    fn evaluate_at(&self, order: &TrackedOrder, now: DateTime<Utc>) -> SlaResult;

    /// Evaluate against the current time.
    fn evaluate(&self, order: &TrackedOrder) -> SlaResult {
        self.evaluate_at(order, Utc::now())
    }
}
