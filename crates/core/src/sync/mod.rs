//! Offline pending-sync counter.
//!
//! A single non-negative integer counting items waiting to be synchronized.
//! It is owned by the surrounding application and injected where needed; the
//! ticket engine never reads it.

mod sqlite_store;
mod store;

pub use sqlite_store::SqlitePendingSync;
pub use store::{MemoryPendingSync, PendingSyncStore, SyncError};

use std::sync::Arc;

use crate::config::{SyncBackend, SyncConfig};

/// Factory function to create the pending sync store from config
pub fn create_pending_sync(config: &SyncConfig) -> Result<Arc<dyn PendingSyncStore>, SyncError> {
    match config.backend {
        SyncBackend::Memory => Ok(Arc::new(MemoryPendingSync::new())),
        SyncBackend::Sqlite => Ok(Arc::new(SqlitePendingSync::new(&config.path)?)),
    }
}
