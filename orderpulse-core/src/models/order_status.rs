use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::errors::OrderError;

/// Lifecycle status of an order. Exactly one stage is active at a time.
///
/// Status strings the host database adds later deserialize to
/// [`Unrecognized`](Self::Unrecognized), which is evaluated against the
/// fallback threshold instead of failing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingPayment,
    PaymentConfirmed,
    Processing,
    ReadyToShip,
    Shipped,
    FailedDelivery,
    Delivered,
    Cancelled,
    Unrecognized,
}

impl OrderStatus {
    /// Every known status. `Unrecognized` is not listed.
    pub const ALL: [OrderStatus; 8] = [
        Self::PendingPayment,
        Self::PaymentConfirmed,
        Self::Processing,
        Self::ReadyToShip,
        Self::Shipped,
        Self::FailedDelivery,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Terminal statuses carry no SLA obligation.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Wire name, as stored by the host database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendingPayment => "pending_payment",
            Self::PaymentConfirmed => "payment_confirmed",
            Self::Processing => "processing",
            Self::ReadyToShip => "ready_to_ship",
            Self::Shipped => "shipped",
            Self::FailedDelivery => "failed_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Human-readable stage name used in SLA reasons.
    pub fn label(self) -> &'static str {
        match self {
            Self::PendingPayment => "Pending Payment",
            Self::PaymentConfirmed => "Payment Confirmed",
            Self::Processing => "Processing",
            Self::ReadyToShip => "Ready to Ship",
            Self::Shipped => "Shipped",
            Self::FailedDelivery => "Failed Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Unrecognized => "Unknown Stage",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OrderError::UnknownStatus {
                status: s.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str(&raw).unwrap_or(Self::Unrecognized))
    }
}
