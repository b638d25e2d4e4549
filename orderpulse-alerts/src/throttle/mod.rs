//! Alert throttling: cooldown windows and user snoozes, persisted as one
//! JSON snapshot through an [`IKeyValueStore`](orderpulse_core::traits::IKeyValueStore).

mod cooldown;
mod store;

pub use cooldown::CooldownPolicy;
pub use store::ThrottleStore;
