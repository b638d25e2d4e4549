use chrono::Duration;
use orderpulse_core::config::AlertConfig;
use orderpulse_core::models::Sensitivity;

/// Cooldown window per sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownPolicy {
    pub standard_hours: u32,
    pub high_sensitivity_hours: u32,
}

impl CooldownPolicy {
    pub fn from_config(config: &AlertConfig) -> Self {
        Self {
            standard_hours: config.standard_cooldown_hours,
            high_sensitivity_hours: config.high_sensitivity_cooldown_hours,
        }
    }

    pub fn window(&self, sensitivity: Sensitivity) -> Duration {
        let hours = match sensitivity {
            Sensitivity::Standard => self.standard_hours,
            Sensitivity::High => self.high_sensitivity_hours,
        };
        Duration::hours(i64::from(hours))
    }
}

impl Default for CooldownPolicy {
    fn default() -> Self {
        Self::from_config(&AlertConfig::default())
    }
}
