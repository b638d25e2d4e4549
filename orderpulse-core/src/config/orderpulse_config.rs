//! Top-level OrderPulse configuration with layered resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AlertConfig, ObservabilityConfig, SlaConfig};
use crate::constants::{CONFIG_FILENAME, GROUP_PREVIEW_SIZE, MAX_EXPECTED_DAYS};
use crate::errors::ConfigError;
use crate::models::OrderStatus;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ORDERPULSE_*`)
/// 2. Project config (`orderpulse.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OrderPulseConfig {
    pub sla: SlaConfig,
    pub alerts: AlertConfig,
    pub observability: ObservabilityConfig,
}

impl OrderPulseConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(root, |key| std::env::var(key).ok())
    }

    /// Same as [`load`](Self::load) with an explicit environment lookup.
    pub fn load_with_env<F>(root: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = root.join(CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single TOML file. Missing keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `ORDERPULSE_*` overrides. Unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env("ORDERPULSE_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        if let Some(val) = env("ORDERPULSE_SLA_FALLBACK_DAYS") {
            if let Ok(v) = val.parse::<u32>() {
                self.sla.fallback_days = v;
            }
        }
        if let Some(val) = env("ORDERPULSE_RISK_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                self.alerts.critical_risk_threshold = v;
            }
        }
        if let Some(val) = env("ORDERPULSE_STORE_PATH") {
            self.alerts.store_path = Some(val);
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_days("sla.fallback_days", self.sla.fallback_days)?;
        for (status, days) in &self.sla.thresholds {
            let field = format!("sla.thresholds.{status}");
            if OrderStatus::from_str(status).is_err() {
                return Err(ConfigError::ValidationFailed {
                    field,
                    message: "not a known order status".to_string(),
                });
            }
            check_days(&field, *days)?;
        }
        let ratio = self.sla.at_risk_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "sla.at_risk_ratio".to_string(),
                message: "must be in (0.0, 1.0]".to_string(),
            });
        }
        if self.alerts.standard_cooldown_hours == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "alerts.standard_cooldown_hours".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.alerts.high_sensitivity_cooldown_hours == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "alerts.high_sensitivity_cooldown_hours".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let threshold = self.alerts.critical_risk_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "alerts.critical_risk_threshold".to_string(),
                message: "must be a non-negative number".to_string(),
            });
        }
        // A collapsed group previews GROUP_PREVIEW_SIZE items and must hide at least one.
        if self.alerts.group_threshold < GROUP_PREVIEW_SIZE {
            return Err(ConfigError::ValidationFailed {
                field: "alerts.group_threshold".to_string(),
                message: format!("must be at least {GROUP_PREVIEW_SIZE}"),
            });
        }
        if self.alerts.storage_key.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "alerts.storage_key".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Reject expected-day values outside `1..=MAX_EXPECTED_DAYS`.
pub fn check_days(field: &str, days: u32) -> Result<(), ConfigError> {
    if days == 0 || days > MAX_EXPECTED_DAYS {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be between 1 and {MAX_EXPECTED_DAYS}"),
        });
    }
    Ok(())
}
