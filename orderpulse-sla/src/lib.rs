//! # orderpulse-sla
//!
//! Order SLA evaluation: resolves when an order entered its current stage,
//! classifies it as on-track / at-risk / breached against a per-status
//! threshold table, and turns the classification into a sortable urgency score.

pub mod engine;
pub mod evaluator;
pub mod stage_clock;
pub mod summary;
pub mod thresholds;
pub mod urgency;

pub use engine::SlaEngine;
pub use evaluator::SlaRules;
pub use stage_clock::stage_entry_date;
pub use summary::SlaSummary;
pub use thresholds::SlaThresholdTable;
pub use urgency::{rank_by_urgency, urgency_score, RankedOrder};
