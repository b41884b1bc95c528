//! Persisted application state schema
//!
//! This module defines the single durable record the application keeps:
//! the favorites collection and the notification preferences. There is no
//! schema version field; every field tolerates absence so older blobs keep
//! loading as fields are added.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use quote_core::FavoriteSet;

use crate::kv::KvStore;
use crate::persistence::PersistedRecord;

/// Key the application record is stored under
pub const QUOTE_STORAGE_KEY: &str = "quote-storage";

/// Application state persisted across restarts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedQuoteState {
    /// Quotes the user has marked as favorites
    #[serde(default)]
    pub favorites: FavoriteSet,

    /// Time of day for the daily notification, stored verbatim
    #[serde(default = "default_notification_time")]
    pub notification_time: String,

    /// Whether daily notifications are enabled
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
}

fn default_notification_time() -> String {
    "09:00".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PersistedQuoteState {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistedQuoteState {
    /// Create the first-run state
    pub fn new() -> Self {
        Self {
            favorites: FavoriteSet::new(),
            notification_time: default_notification_time(),
            notifications_enabled: true,
        }
    }
}

/// Open the application record in the given store
pub fn open_quote_state(kv: Arc<KvStore>) -> PersistedRecord<PersistedQuoteState> {
    PersistedRecord::load(kv, QUOTE_STORAGE_KEY)
}
