use std::cmp::Reverse;

use orderpulse_core::models::{SlaResult, SlaStatus, TrackedOrder};

/// Score floor for breached orders.
pub const BREACHED_BAND: u32 = 1000;
/// Score floor for at-risk orders. Orders with an unknown stage age share it.
pub const AT_RISK_BAND: u32 = 500;

/// Sort key for an SLA result; higher is more urgent.
///
/// Bands keep every breached order above every at-risk order above every
/// on-track order, and days in stage order entries within a band.
pub fn urgency_score(result: &SlaResult) -> u32 {
    let days = result.days_in_stage;
    match result.status {
        SlaStatus::Breached => BREACHED_BAND.saturating_add(days),
        SlaStatus::AtRisk => AT_RISK_BAND.saturating_add(days),
        SlaStatus::Unknown => AT_RISK_BAND,
        SlaStatus::OnTrack => days,
    }
}

/// An order paired with its SLA result and urgency score.
#[derive(Debug, Clone)]
pub struct RankedOrder<'a> {
    pub order: &'a TrackedOrder,
    pub sla: SlaResult,
    pub score: u32,
}

/// Stable descending sort by urgency score. Ties keep input order.
pub fn rank_by_urgency(ranked: &mut [RankedOrder<'_>]) {
    ranked.sort_by_key(|r| Reverse(r.score));
}
