use chrono::{DateTime, Utc};
use orderpulse_core::config::SlaConfig;
use orderpulse_core::errors::ConfigError;
use orderpulse_core::models::{SlaResult, SlaStatus, TrackedOrder};
use orderpulse_core::traits::ISlaEvaluator;
use orderpulse_observability::tracing_setup::events;
use rayon::prelude::*;

use crate::evaluator::{self, SlaRules};
use crate::summary::SlaSummary;
use crate::urgency::{self, RankedOrder};

/// SLA engine: evaluates single orders or whole batches against one rule set.
pub struct SlaEngine {
    rules: SlaRules,
}

impl SlaEngine {
    /// Engine with the built-in thresholds and default policy.
    pub fn new() -> Self {
        Self {
            rules: SlaRules::default(),
        }
    }

    pub fn with_rules(rules: SlaRules) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &SlaConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_rules(SlaRules::from_config(config)?))
    }

    pub fn rules(&self) -> &SlaRules {
        &self.rules
    }

    /// Evaluate a batch at one instant. Orders are independent, so the work
    /// is spread across the rayon pool; output order matches input order.
    pub fn evaluate_batch(&self, orders: &[TrackedOrder], now: DateTime<Utc>) -> Vec<SlaResult> {
        let _span = orderpulse_observability::sla_batch_span!(orders.len()).entered();
        let results: Vec<SlaResult> = orders
            .par_iter()
            .map(|order| evaluator::evaluate(order, &self.rules, now))
            .collect();

        let mut at_risk = 0;
        let mut breached = 0;
        for (order, result) in orders.iter().zip(&results) {
            match result.status {
                SlaStatus::AtRisk => at_risk += 1,
                SlaStatus::Breached => {
                    breached += 1;
                    events::sla_breached(
                        &order.id,
                        order.status.as_str(),
                        result.days_in_stage,
                        result.expected_days,
                    );
                }
                _ => {}
            }
        }
        events::sla_batch_evaluated(orders.len(), at_risk, breached);
        results
    }

    /// Evaluate and sort a batch, most urgent first.
    pub fn rank<'a>(&self, orders: &'a [TrackedOrder], now: DateTime<Utc>) -> Vec<RankedOrder<'a>> {
        let mut ranked: Vec<RankedOrder<'a>> = orders
            .iter()
            .zip(self.evaluate_batch(orders, now))
            .map(|(order, sla)| RankedOrder {
                order,
                score: urgency::urgency_score(&sla),
                sla,
            })
            .collect();
        urgency::rank_by_urgency(&mut ranked);
        ranked
    }

    /// Aggregate counts for a dashboard tile.
    pub fn summarize(&self, orders: &[TrackedOrder], now: DateTime<Utc>) -> SlaSummary {
        let results = self.evaluate_batch(orders, now);
        SlaSummary::from_results(orders.iter().zip(results.iter()))
    }
}

impl Default for SlaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ISlaEvaluator for SlaEngine {
    fn evaluate_at(&self, order: &TrackedOrder, now: DateTime<Utc>) -> SlaResult {
        evaluator::evaluate(order, &self.rules, now)
    }
}
