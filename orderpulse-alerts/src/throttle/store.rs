use chrono::{DateTime, Duration, Utc};
use orderpulse_core::config::AlertConfig;
use orderpulse_core::errors::PersistenceError;
use orderpulse_core::models::{Sensitivity, ThrottleRecord, ThrottleState};
use orderpulse_core::traits::IKeyValueStore;
use orderpulse_observability::tracing_setup::events;

use super::CooldownPolicy;
use crate::backends::{self, MemoryStore};

/// Per-alert-type display history with cooldown and snooze checks.
///
/// The whole map is held in memory and written back as a full snapshot on
/// every mutation. Backend failures never reach the caller: reads fall back
/// to an empty map, writes are logged and the in-memory state stays
/// authoritative.
pub struct ThrottleStore {
    backend: Box<dyn IKeyValueStore>,
    storage_key: String,
    cooldowns: CooldownPolicy,
    state: ThrottleState,
    degraded: bool,
}

impl ThrottleStore {
    /// Open a store over `backend`, loading any existing snapshot.
    pub fn open(
        backend: Box<dyn IKeyValueStore>,
        storage_key: impl Into<String>,
        cooldowns: CooldownPolicy,
    ) -> Self {
        let mut store = Self {
            backend,
            storage_key: storage_key.into(),
            cooldowns,
            state: ThrottleState::new(),
            degraded: false,
        };
        store.reload();
        store
    }

    /// Store with default cooldowns over a process-local backend.
    pub fn in_memory() -> Self {
        let config = AlertConfig::default();
        Self::open(
            Box::new(MemoryStore::new()),
            config.storage_key,
            CooldownPolicy::default(),
        )
    }

    /// Store configured from `[alerts]`. If the configured backend cannot be
    /// opened the store runs in memory and reports itself degraded.
    pub fn from_config(config: &AlertConfig) -> Self {
        let cooldowns = CooldownPolicy::from_config(config);
        match backends::open_backend(config) {
            Ok(backend) => Self::open(backend, config.storage_key.clone(), cooldowns),
            Err(e) => {
                events::persistence_degraded("throttle_store", &e.to_string(), "memory");
                let mut store = Self::open(
                    Box::new(MemoryStore::new()),
                    config.storage_key.clone(),
                    cooldowns,
                );
                store.degraded = true;
                store
            }
        }
    }

    /// Re-read the snapshot from the backend, replacing in-memory state.
    pub fn reload(&mut self) {
        self.state = match self.read_snapshot() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(key = %self.storage_key, error = %e, "failed to load throttle state, starting empty");
                if !matches!(e, PersistenceError::Corrupt { .. }) {
                    self.degraded = true;
                }
                ThrottleState::new()
            }
        };
    }

    // --- Queries ---

    /// Whether `key` should be suppressed right now.
    pub fn is_throttled(&self, key: &str, sensitivity: Sensitivity) -> bool {
        self.is_throttled_at(key, sensitivity, Utc::now())
    }

    /// Snoozed into the future, or shown within the cooldown window.
    pub fn is_throttled_at(&self, key: &str, sensitivity: Sensitivity, now: DateTime<Utc>) -> bool {
        let Some(record) = self.state.get(key) else {
            return false;
        };
        if record.is_snoozed(now) {
            return true;
        }
        now - record.last_shown < self.cooldowns.window(sensitivity)
    }

    pub fn is_snoozed_at(&self, key: &str, now: DateTime<Utc>) -> bool {
        self.state.get(key).is_some_and(|r| r.is_snoozed(now))
    }

    /// Number of alert types with an active snooze.
    pub fn snoozed_count(&self, now: DateTime<Utc>) -> usize {
        self.state.values().filter(|r| r.is_snoozed(now)).count()
    }

    pub fn record(&self, key: &str) -> Option<&ThrottleRecord> {
        self.state.get(key)
    }

    pub fn state(&self) -> &ThrottleState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn cooldowns(&self) -> CooldownPolicy {
        self.cooldowns
    }

    /// True once any backend read or write has failed.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    // --- Mutations ---

    pub fn mark_as_shown(&mut self, key: &str) {
        self.mark_as_shown_at(key, Utc::now());
    }

    /// Record a display: bump the count, reset the cooldown, keep any snooze.
    pub fn mark_as_shown_at(&mut self, key: &str, now: DateTime<Utc>) {
        self.touch(key, now);
        self.persist();
    }

    /// Mark several keys shown with one snapshot write.
    pub fn mark_all_shown_at<'a, I>(&mut self, keys: I, now: DateTime<Utc>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut touched = false;
        for key in keys {
            touched = true;
            self.touch(key, now);
        }
        if touched {
            self.persist();
        }
    }

    pub fn snooze(&mut self, key: &str, hours: u32) {
        self.snooze_at(key, hours, Utc::now());
    }

    /// Suppress `key` for `hours`. A never-shown key gets a fresh record.
    pub fn snooze_at(&mut self, key: &str, hours: u32, now: DateTime<Utc>) {
        let until = now + Duration::hours(i64::from(hours));
        self.state
            .entry(key.to_string())
            .and_modify(|r| r.snoozed_until = Some(until))
            .or_insert_with(|| ThrottleRecord {
                last_shown: now,
                show_count: 0,
                snoozed_until: Some(until),
            });
        events::alert_snoozed(key, hours);
        self.persist();
    }

    /// Clear the snooze on `key`. The cooldown still applies.
    pub fn unsnooze(&mut self, key: &str) {
        if let Some(record) = self.state.get_mut(key) {
            record.snoozed_until = None;
            self.persist();
        }
    }

    pub fn clear_all_snoozes(&mut self) {
        let mut cleared = 0;
        for record in self.state.values_mut() {
            if record.snoozed_until.take().is_some() {
                cleared += 1;
            }
        }
        events::throttle_state_reset("snoozes", cleared);
        self.persist();
    }

    pub fn clear_all_throttles(&mut self) {
        events::throttle_state_reset("all", self.state.len());
        self.state.clear();
        self.persist();
    }

    /// Drop snoozes that have already ended. Returns how many were cleared.
    pub fn prune_expired_snoozes(&mut self, now: DateTime<Utc>) -> usize {
        let mut pruned = 0;
        for record in self.state.values_mut() {
            if record.snoozed_until.is_some_and(|until| until <= now) {
                record.snoozed_until = None;
                pruned += 1;
            }
        }
        if pruned > 0 {
            self.persist();
        }
        pruned
    }

    fn touch(&mut self, key: &str, now: DateTime<Utc>) {
        self.state
            .entry(key.to_string())
            .and_modify(|r| {
                r.last_shown = now;
                r.show_count = r.show_count.saturating_add(1);
            })
            .or_insert_with(|| ThrottleRecord::first_shown(now));
    }

    // --- Persistence ---

    fn read_snapshot(&self) -> Result<ThrottleState, PersistenceError> {
        match self.backend.get(&self.storage_key)? {
            None => Ok(ThrottleState::new()),
            Some(json) => serde_json::from_str(&json).map_err(|e| PersistenceError::Corrupt {
                key: self.storage_key.clone(),
                message: e.to_string(),
            }),
        }
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.state)
            .map_err(|e| PersistenceError::Serialize {
                message: e.to_string(),
            })
            .and_then(|json| self.backend.set(&self.storage_key, &json));
        if let Err(e) = result {
            if !self.degraded {
                events::persistence_degraded("throttle_store", &e.to_string(), "memory");
            }
            tracing::debug!(key = %self.storage_key, error = %e, "throttle snapshot not written");
            self.degraded = true;
        }
    }
}

impl std::fmt::Debug for ThrottleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThrottleStore")
            .field("storage_key", &self.storage_key)
            .field("cooldowns", &self.cooldowns)
            .field("entries", &self.state.len())
            .field("degraded", &self.degraded)
            .finish()
    }
}
