use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::DEFAULT_CATEGORY;

/// How soon an insight needs a human. `Immediate` bypasses throttling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Immediate,
    Soon,
    #[default]
    Normal,
}

/// Alert-type sensitivity. High-sensitivity types use the shorter cooldown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    #[default]
    Standard,
    High,
}

impl Sensitivity {
    /// Legacy naming heuristic: customer- and churn-related keys are high
    /// sensitivity. Only used when an alert type is registered without an
    /// explicit sensitivity.
    pub fn infer_from_key(key: &str) -> Self {
        let key = key.to_ascii_lowercase();
        if key.contains("customer") || key.contains("churn") {
            Self::High
        } else {
            Self::Standard
        }
    }
}

/// A single alert-like item surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Insight {
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub urgency: Urgency,
    pub title: String,
    #[serde(default)]
    pub message: String,
    /// Money at stake, in the tenant's currency.
    #[serde(default, alias = "amountAtRisk")]
    pub amount_at_risk: Option<f64>,
}

impl Insight {
    pub fn new(id: impl Into<String>, category: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: Some(category.into()),
            urgency: Urgency::Normal,
            title: title.into(),
            message: String::new(),
            amount_at_risk: None,
        }
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn with_amount_at_risk(mut self, amount: f64) -> Self {
        self.amount_at_risk = Some(amount);
        self
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// Composite `{category}_{id}` key under which throttle state is kept.
    pub fn throttle_key(&self) -> String {
        format!("{}_{}", self.category_or_default(), self.id)
    }
}

/// Display entry produced by the insight grouper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupedInsight {
    Single {
        insight: Insight,
    },
    Grouped {
        category: String,
        count: usize,
        items: Vec<Insight>,
        summary: String,
    },
}

impl GroupedInsight {
    pub fn category(&self) -> &str {
        match self {
            Self::Single { insight } => insight.category_or_default(),
            Self::Grouped { category, .. } => category,
        }
    }

    /// Number of raw insights this entry stands for.
    pub fn len(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Grouped { count, .. } => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
