use std::collections::HashMap;

use orderpulse_core::config::AlertConfig;
use orderpulse_core::models::Sensitivity;

/// A registered alert type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertTypeDef {
    pub key: String,
    pub sensitivity: Sensitivity,
}

/// Alert types known to the application, with sensitivity resolved once at
/// registration.
#[derive(Debug, Clone, Default)]
pub struct AlertTypeRegistry {
    types: HashMap<String, AlertTypeDef>,
}

impl AlertTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated from `[alerts.types]`.
    pub fn from_config(config: &AlertConfig) -> Self {
        let mut registry = Self::new();
        for (key, sensitivity) in &config.types {
            registry.register(key.clone(), Some(*sensitivity));
        }
        registry
    }

    /// Register (or re-register) an alert type. Without an explicit
    /// sensitivity the legacy key-name heuristic decides.
    pub fn register(&mut self, key: impl Into<String>, sensitivity: Option<Sensitivity>) -> &AlertTypeDef {
        let key = key.into();
        let sensitivity = sensitivity.unwrap_or_else(|| Sensitivity::infer_from_key(&key));
        tracing::debug!(alert_type = %key, ?sensitivity, "registered alert type");
        self.types
            .entry(key.clone())
            .and_modify(|def| def.sensitivity = sensitivity)
            .or_insert(AlertTypeDef { key, sensitivity })
    }

    pub fn get(&self, key: &str) -> Option<&AlertTypeDef> {
        self.types.get(key)
    }

    /// Sensitivity of `key`; unregistered types are standard.
    pub fn sensitivity_of(&self, key: &str) -> Sensitivity {
        self.types
            .get(key)
            .map(|def| def.sensitivity)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
