//! Key-value backends for throttle state.

mod file;
mod memory;
mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::path::Path;

use orderpulse_core::config::{defaults, AlertConfig, StoreBackendKind};
use orderpulse_core::errors::PersistenceError;
use orderpulse_core::traits::IKeyValueStore;

/// Open the backend selected by `[alerts] backend`.
///
/// The file backend needs `store_path`; the SQLite backend defaults to
/// `orderpulse-throttle.db` in the working directory.
pub fn open_backend(config: &AlertConfig) -> Result<Box<dyn IKeyValueStore>, PersistenceError> {
    match config.backend {
        StoreBackendKind::Memory => Ok(Box::new(MemoryStore::new())),
        StoreBackendKind::File => {
            let dir = config
                .store_path
                .as_deref()
                .ok_or_else(|| PersistenceError::Unavailable {
                    reason: "file backend requires alerts.store_path".to_string(),
                })?;
            Ok(Box::new(FileStore::open(Path::new(dir))?))
        }
        StoreBackendKind::Sqlite => {
            let path = config
                .store_path
                .as_deref()
                .unwrap_or(defaults::DEFAULT_STORE_DB_FILENAME);
            Ok(Box::new(SqliteStore::open(Path::new(path))?))
        }
    }
}
