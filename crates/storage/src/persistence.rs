//! Persisted record wrapper
//!
//! This module provides the load-then-wrap-mutations-with-save decorator
//! around a single named record in the key-value store: the record is
//! loaded once, every mutation is followed by a synchronous snapshot
//! write, and reads never trigger writes. A missing or undecodable record
//! falls back to the type's default rather than surfacing an error.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::kv::{KvStore, Result};

/// A typed record persisted under one key in the key-value store
pub struct PersistedRecord<T> {
    kv: Arc<KvStore>,
    key: String,
    state: RwLock<T>,
}

impl<T> PersistedRecord<T>
where
    T: Serialize + DeserializeOwned + Clone + Default,
{
    /// Load the record, falling back to the default value
    ///
    /// A record that is absent or fails to decode yields `T::default()`;
    /// decode failures are logged and otherwise ignored.
    pub fn load(kv: Arc<KvStore>, key: impl Into<String>) -> Self {
        let key = key.into();

        let state = match kv.get::<T>(&key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(error) => {
                warn!(%key, %error, "persisted record unreadable, starting from defaults");
                T::default()
            }
        };

        Self { kv, key, state: RwLock::new(state) }
    }

    /// The key this record is stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get a clone of the current state
    pub async fn get(&self) -> T {
        self.state.read().await.clone()
    }

    /// Read a projection of the current state
    pub async fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let state = self.state.read().await;
        f(&state)
    }

    /// Apply a mutation and persist the resulting snapshot
    ///
    /// The in-memory state is mutated even when the write fails; the
    /// caller decides whether a failed write is worth more than a log
    /// line.
    pub async fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        let mut state = self.state.write().await;
        f(&mut state);

        self.kv.set(&self.key, &*state)?;
        self.kv.flush()?;
        Ok(())
    }

    /// Flush pending writes in the underlying store
    pub fn flush(&self) -> Result<()> {
        self.kv.flush()
    }
}
