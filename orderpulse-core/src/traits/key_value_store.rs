use crate::errors::PersistenceError;

/// String key-value persistence behind the throttle store.
///
/// Implementations must be safe to share; the store itself serializes
/// access, so a simple lock per backend is enough.
pub trait IKeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}
