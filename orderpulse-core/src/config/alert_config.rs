use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Sensitivity;

/// Where throttle state is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackendKind {
    #[default]
    Memory,
    File,
    Sqlite,
}

/// Alert throttling and grouping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    pub standard_cooldown_hours: u32,
    pub high_sensitivity_cooldown_hours: u32,
    /// Amount at risk above which an insight bypasses throttling.
    pub critical_risk_threshold: f64,
    /// Buckets larger than this collapse into one grouped entry.
    pub group_threshold: usize,
    /// Key under which the throttle map is stored.
    pub storage_key: String,
    pub backend: StoreBackendKind,
    /// Directory (file backend) or database file (sqlite backend).
    pub store_path: Option<String>,
    /// Registered alert types and their sensitivity.
    pub types: BTreeMap<String, Sensitivity>,
    /// Register categories missing from `types` the first time they are
    /// grouped, resolving sensitivity from the key name.
    pub auto_register_types: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            standard_cooldown_hours: defaults::DEFAULT_STANDARD_COOLDOWN_HOURS,
            high_sensitivity_cooldown_hours: defaults::DEFAULT_HIGH_SENSITIVITY_COOLDOWN_HOURS,
            critical_risk_threshold: defaults::DEFAULT_CRITICAL_RISK_THRESHOLD,
            group_threshold: defaults::DEFAULT_GROUP_THRESHOLD,
            storage_key: defaults::DEFAULT_THROTTLE_STORAGE_KEY.to_string(),
            backend: StoreBackendKind::default(),
            store_path: None,
            types: BTreeMap::new(),
            auto_register_types: defaults::DEFAULT_AUTO_REGISTER_TYPES,
        }
    }
}
