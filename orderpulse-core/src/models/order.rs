use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::OrderStatus;
use crate::errors::OrderError;

/// An order snapshot as read from the host database.
///
/// Every timestamp is nullable. Timestamps that fail to parse are treated
/// as absent rather than rejected, so a single bad row never blocks a batch.
/// Field names accept both the database's `snake_case` columns and the
/// frontend's `camelCase` spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedOrder {
    #[serde(default)]
    pub id: String,
    pub status: OrderStatus,
    #[serde(default, alias = "createdAt", deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "paymentConfirmedAt",
        deserialize_with = "lenient_timestamp"
    )]
    pub payment_confirmed_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "processingStartedAt",
        deserialize_with = "lenient_timestamp"
    )]
    pub processing_started_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "readyToShipAt", deserialize_with = "lenient_timestamp")]
    pub ready_to_ship_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "shippedAt", deserialize_with = "lenient_timestamp")]
    pub shipped_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "deliveredAt", deserialize_with = "lenient_timestamp")]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "cancelledAt", deserialize_with = "lenient_timestamp")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "failedDeliveryAt",
        deserialize_with = "lenient_timestamp"
    )]
    pub failed_delivery_at: Option<DateTime<Utc>>,
}

impl TrackedOrder {
    /// A bare order in `status`, created at `created_at`, with no stage timestamps.
    pub fn new(id: impl Into<String>, status: OrderStatus, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            status,
            created_at: Some(created_at),
            payment_confirmed_at: None,
            processing_started_at: None,
            ready_to_ship_at: None,
            shipped_at: None,
            delivered_at: None,
            cancelled_at: None,
            failed_delivery_at: None,
        }
    }

    /// Parse a single order record from JSON.
    pub fn from_json(json: &str) -> Result<Self, OrderError> {
        serde_json::from_str(json).map_err(|e| OrderError::InvalidRecord {
            reason: e.to_string(),
        })
    }

    /// Parse a JSON array of order records.
    pub fn from_json_array(json: &str) -> Result<Vec<Self>, OrderError> {
        serde_json::from_str(json).map_err(|e| OrderError::InvalidRecord {
            reason: e.to_string(),
        })
    }
}

/// Parse a timestamp in any of the shapes the host database emits:
/// RFC 3339 (`2024-03-01T10:00:00.123+00:00`), a naive `YYYY-MM-DD HH:MM:SS`
/// (taken as UTC), or a bare date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => parse_timestamp(&s),
        _ => None,
    })
}
