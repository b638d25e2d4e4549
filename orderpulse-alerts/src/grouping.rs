use chrono::{DateTime, Utc};
use orderpulse_core::config::{defaults, AlertConfig};
use orderpulse_core::constants::GROUP_PREVIEW_SIZE;
use orderpulse_core::models::{GroupedInsight, Insight, Sensitivity};
use orderpulse_observability::tracing_setup::events;

use crate::critical::CriticalPolicy;
use crate::registry::AlertTypeRegistry;
use crate::throttle::ThrottleStore;

/// Result of filtering and grouping a batch of insights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupOutcome {
    /// Display entries, buckets in first-seen order.
    pub visible: Vec<GroupedInsight>,
    /// Alert types currently snoozed (not counting plain cooldowns).
    pub snoozed_count: usize,
    pub critical_count: usize,
    /// Insights hidden by cooldown or snooze.
    pub throttled_count: usize,
    /// Throttle keys of every visible insight, for `mark_all_shown_at`.
    pub shown_keys: Vec<String>,
}

/// Filters insights through the throttle store and buckets them by category.
#[derive(Debug, Clone)]
pub struct InsightGrouper {
    registry: AlertTypeRegistry,
    critical: CriticalPolicy,
    group_threshold: usize,
    auto_register: bool,
}

impl InsightGrouper {
    pub fn new(registry: AlertTypeRegistry, critical: CriticalPolicy, group_threshold: usize) -> Self {
        Self {
            registry,
            critical,
            group_threshold: group_threshold.max(GROUP_PREVIEW_SIZE),
            auto_register: defaults::DEFAULT_AUTO_REGISTER_TYPES,
        }
    }

    pub fn from_config(config: &AlertConfig) -> Self {
        Self::new(
            AlertTypeRegistry::from_config(config),
            CriticalPolicy::from_config(config),
            config.group_threshold,
        )
        .with_auto_register(config.auto_register_types)
    }

    /// When enabled, a category seen for the first time is registered with
    /// [`Sensitivity::infer_from_key`]. Otherwise unregistered categories
    /// stay standard.
    pub fn with_auto_register(mut self, enabled: bool) -> Self {
        self.auto_register = enabled;
        self
    }

    pub fn registry(&self) -> &AlertTypeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut AlertTypeRegistry {
        &mut self.registry
    }

    pub fn group_and_filter(
        &mut self,
        items: &[Insight],
        store: &ThrottleStore,
        risk_amount: Option<f64>,
    ) -> GroupOutcome {
        self.group_and_filter_at(items, store, risk_amount, Utc::now())
    }

    /// Partition `items` into critical / visible / throttled, then bucket the
    /// visible ones by category. Critical insights are checked before any
    /// throttle state and are always visible. Input order is preserved.
    pub fn group_and_filter_at(
        &mut self,
        items: &[Insight],
        store: &ThrottleStore,
        risk_amount: Option<f64>,
        now: DateTime<Utc>,
    ) -> GroupOutcome {
        let _span = orderpulse_observability::grouping_span!(items.len()).entered();
        let mut outcome = GroupOutcome {
            snoozed_count: store.snoozed_count(now),
            ..GroupOutcome::default()
        };

        let mut buckets: Vec<(&str, Vec<&Insight>)> = Vec::new();
        for insight in items {
            let key = insight.throttle_key();
            let category = insight.category_or_default();

            if self.critical.is_critical(insight, risk_amount) {
                outcome.critical_count += 1;
            } else {
                let sensitivity = self.sensitivity_for(category);
                if store.is_throttled_at(&key, sensitivity, now) {
                    outcome.throttled_count += 1;
                    continue;
                }
            }

            outcome.shown_keys.push(key);
            match buckets.iter_mut().find(|(c, _)| *c == category) {
                Some((_, bucket)) => bucket.push(insight),
                None => buckets.push((category, vec![insight])),
            }
        }

        for (category, bucket) in buckets {
            if bucket.len() <= self.group_threshold {
                outcome.visible.extend(bucket.into_iter().map(|insight| GroupedInsight::Single {
                    insight: insight.clone(),
                }));
            } else {
                outcome.visible.push(collapse(category, &bucket));
            }
        }

        events::insights_grouped(
            items.len(),
            outcome.visible.len(),
            outcome.critical_count,
            outcome.throttled_count,
        );
        outcome
    }

    fn sensitivity_for(&mut self, category: &str) -> Sensitivity {
        if self.auto_register && self.registry.get(category).is_none() {
            self.registry.register(category, None);
        }
        self.registry.sensitivity_of(category)
    }
}

impl Default for InsightGrouper {
    fn default() -> Self {
        Self::from_config(&AlertConfig::default())
    }
}

fn collapse(category: &str, bucket: &[&Insight]) -> GroupedInsight {
    let count = bucket.len();
    let shown = count.min(GROUP_PREVIEW_SIZE);
    GroupedInsight::Grouped {
        category: category.to_string(),
        count,
        items: bucket.iter().take(shown).map(|i| (*i).clone()).collect(),
        summary: format!(
            "Showing {shown} of {count} {category} insights (+{} more)",
            count - shown
        ),
    }
}
