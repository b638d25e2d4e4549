use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display history of one alert type.
///
/// Serialized in the frontend's legacy shape
/// (`{ lastShown, showCount, snoozedUntil? }`, ISO-8601 millisecond strings)
/// so state written by older clients loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ThrottleRecord {
    #[serde(with = "iso_millis")]
    #[ts(type = "string")]
    pub last_shown: DateTime<Utc>,
    #[serde(default)]
    pub show_count: u32,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "iso_millis::option"
    )]
    #[ts(type = "string | null")]
    pub snoozed_until: Option<DateTime<Utc>>,
}

impl ThrottleRecord {
    pub fn first_shown(now: DateTime<Utc>) -> Self {
        Self {
            last_shown: now,
            show_count: 1,
            snoozed_until: None,
        }
    }

    pub fn is_snoozed(&self, now: DateTime<Utc>) -> bool {
        self.snoozed_until.is_some_and(|until| until > now)
    }
}

/// Full throttle map, keyed by alert-type key.
pub type ThrottleState = BTreeMap<String, ThrottleRecord>;

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::models::parse_timestamp;

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            dt: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match dt {
                Some(dt) => super::serialize(dt, s),
                None => s.serialize_none(),
            }
        }

        // An unreadable snooze is dropped rather than failing the whole map.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            let raw: Option<String> = Option::deserialize(d)?;
            Ok(raw.as_deref().and_then(parse_timestamp))
        }
    }
}
