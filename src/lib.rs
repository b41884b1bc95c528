//! Luminary application root
//!
//! This crate composes the member crates into the running application:
//! it opens the durable store, restores persisted state, and owns the
//! quote store for the lifetime of the process.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use storage::{open_quote_state, KvConfig, KvError, KvStore};

pub use app_platform::{LogShare, ShareError, ShareTarget};
pub use app_state::{QuoteStore, ShareOutcome, StoreEvent};
pub use quote_core::{Catalog, Category, FavoriteSet, Quote};

/// File name of the key-value database inside the data directory
const KV_DB_NAME: &str = "luminary_kv.db";

/// Errors that can occur while bootstrapping the application
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The durable store could not be opened
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),
}

/// The composed application
///
/// Constructed once at startup after restoring persisted fields; consumers
/// receive a reference to the store rather than reaching for a global.
/// [`App::shutdown`] flushes pending writes on exit or backgrounding.
pub struct App {
    store: QuoteStore,
}

impl App {
    /// Open the durable store under `data_dir` and restore state
    ///
    /// A missing or unreadable record starts the application from
    /// defaults; only a failure to open the store itself is an error.
    pub fn bootstrap(data_dir: &Path) -> Result<Self, BootstrapError> {
        let db_path = data_dir.join(KV_DB_NAME);
        let kv = Arc::new(KvStore::new(KvConfig::new(db_path.to_string_lossy()))?);

        let store = QuoteStore::new(open_quote_state(kv));
        info!(path = %db_path.display(), "application state restored");

        Ok(App { store })
    }

    /// Bootstrap over an in-memory store (for tests)
    pub fn in_memory() -> Result<Self, BootstrapError> {
        let kv = Arc::new(KvStore::in_memory()?);
        Ok(App { store: QuoteStore::new(open_quote_state(kv)) })
    }

    /// The quote store
    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Flush pending writes before the process exits or backgrounds
    pub fn shutdown(&self) {
        self.store.flush();
        info!("application state flushed");
    }
}
