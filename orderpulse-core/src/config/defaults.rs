// Single source of truth for all default values.

// --- SLA ---
pub const DEFAULT_SLA_FALLBACK_DAYS: u32 = 2;
pub const DEFAULT_AT_RISK_RATIO: f64 = 0.75;

// Expected days per stage. Failed delivery has no built-in entry and
// resolves to the fallback.
pub const DEFAULT_PENDING_PAYMENT_DAYS: u32 = 3;
pub const DEFAULT_PAYMENT_CONFIRMED_DAYS: u32 = 1;
pub const DEFAULT_PROCESSING_DAYS: u32 = 2;
pub const DEFAULT_READY_TO_SHIP_DAYS: u32 = 1;
pub const DEFAULT_SHIPPED_DAYS: u32 = 7;

// --- Alerts ---
pub const DEFAULT_STANDARD_COOLDOWN_HOURS: u32 = 24;
pub const DEFAULT_HIGH_SENSITIVITY_COOLDOWN_HOURS: u32 = 12;
pub const DEFAULT_CRITICAL_RISK_THRESHOLD: f64 = 10_000.0;
pub const DEFAULT_GROUP_THRESHOLD: usize = 3;
pub const DEFAULT_AUTO_REGISTER_TYPES: bool = true;
pub const DEFAULT_THROTTLE_STORAGE_KEY: &str = "insight_throttle_state";
pub const DEFAULT_STORE_DB_FILENAME: &str = "orderpulse-throttle.db";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
