use orderpulse_core::config::AlertConfig;
use orderpulse_core::models::{Insight, Urgency};

/// Decides which insights bypass throttling entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPolicy {
    /// Amounts strictly above this are critical.
    pub risk_threshold: f64,
}

impl CriticalPolicy {
    pub fn new(risk_threshold: f64) -> Self {
        Self { risk_threshold }
    }

    pub fn from_config(config: &AlertConfig) -> Self {
        Self::new(config.critical_risk_threshold)
    }

    /// An insight is critical when it is marked `immediate`, or when the
    /// larger of its own amount at risk and the caller-supplied amount
    /// exceeds the threshold.
    pub fn is_critical(&self, insight: &Insight, risk_amount: Option<f64>) -> bool {
        if insight.urgency == Urgency::Immediate {
            return true;
        }
        [insight.amount_at_risk, risk_amount]
            .into_iter()
            .flatten()
            .any(|amount| amount > self.risk_threshold)
    }
}

impl Default for CriticalPolicy {
    fn default() -> Self {
        Self::from_config(&AlertConfig::default())
    }
}
