//! Pending sync storage trait and in-memory implementation.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

/// Error type for pending sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Trait for pending sync counter backends.
///
/// Every mutating operation returns the new count.
pub trait PendingSyncStore: Send + Sync {
    /// Current number of pending items.
    fn count(&self) -> Result<u64, SyncError>;

    /// Record one more pending item.
    fn increment(&self) -> Result<u64, SyncError>;

    /// Remove `count` pending items, never going below zero.
    fn decrement(&self, count: u64) -> Result<u64, SyncError>;

    /// Drop all pending items.
    fn clear(&self) -> Result<u64, SyncError>;
}

/// Process-local pending sync counter.
#[derive(Debug, Default)]
pub struct MemoryPendingSync {
    count: AtomicU64,
}

impl MemoryPendingSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing count.
    pub fn with_count(count: u64) -> Self {
        Self {
            count: AtomicU64::new(count),
        }
    }

    fn update(&self, f: impl Fn(u64) -> u64) -> u64 {
        let previous = self
            .count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |c| Some(f(c)))
            .unwrap_or_else(|c| c);
        f(previous)
    }
}

impl PendingSyncStore for MemoryPendingSync {
    fn count(&self) -> Result<u64, SyncError> {
        Ok(self.count.load(Ordering::SeqCst))
    }

    fn increment(&self) -> Result<u64, SyncError> {
        Ok(self.update(|c| c.saturating_add(1)))
    }

    fn decrement(&self, count: u64) -> Result<u64, SyncError> {
        Ok(self.update(|c| c.saturating_sub(count)))
    }

    fn clear(&self) -> Result<u64, SyncError> {
        self.count.store(0, Ordering::SeqCst);
        Ok(0)
    }
}
