use orderpulse_core::models::{SlaResult, SlaStatus, TrackedOrder};
use serde::Serialize;

/// Counts of orders per SLA class, for dashboard tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlaSummary {
    pub total: usize,
    /// Delivered or cancelled orders. Not counted in `on_track`.
    pub completed: usize,
    pub on_track: usize,
    pub at_risk: usize,
    pub breached: usize,
    pub unknown: usize,
    /// Ids of breached orders, in input order.
    pub breached_ids: Vec<String>,
    /// Largest days-in-stage among breached orders.
    pub worst_overdue_days: Option<u32>,
}

impl SlaSummary {
    pub fn from_results<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a TrackedOrder, &'a SlaResult)>,
    {
        let mut summary = Self::default();
        for (order, result) in pairs {
            summary.total += 1;
            if order.status.is_terminal() {
                summary.completed += 1;
                continue;
            }
            match result.status {
                SlaStatus::OnTrack => summary.on_track += 1,
                SlaStatus::AtRisk => summary.at_risk += 1,
                SlaStatus::Unknown => summary.unknown += 1,
                SlaStatus::Breached => {
                    summary.breached += 1;
                    summary.breached_ids.push(order.id.clone());
                    summary.worst_overdue_days = Some(
                        summary
                            .worst_overdue_days
                            .map_or(result.days_in_stage, |d| d.max(result.days_in_stage)),
                    );
                }
            }
        }
        summary
    }

    /// Share of open orders that are breached, in [0.0, 1.0].
    pub fn breach_rate(&self) -> f64 {
        let open = self.total - self.completed;
        if open == 0 {
            0.0
        } else {
            self.breached as f64 / open as f64
        }
    }
}
