//! The quote store
//!
//! This module provides `QuoteStore`, the single writer for all quote
//! state: the current daily selection, the persisted favorites collection,
//! and the notification preferences. Screens call its operations and
//! render the returned values; observers can additionally watch the daily
//! quote or subscribe to the event stream.
//!
//! Every mutation is followed by a synchronous snapshot write through the
//! persistence layer. Persistence and sharing failures are logged and
//! swallowed; no operation here returns an error.

use std::sync::Arc;
use tokio::sync::{broadcast, watch, Mutex, RwLock};
use tracing::{debug, warn};

use app_platform::{quote_share_text, LogShare, ShareTarget};
use quote_core::{next_daily, Catalog, Category, Quote, RandomSource, ThreadRandom};
use storage::{PersistedQuoteState, PersistedRecord};

/// Capacity of the store event channel
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Events broadcast when store state changes
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// A new daily quote was selected, or its favorite flag changed
    DailyQuoteChanged(Quote),
    /// A quote was added to favorites
    FavoriteAdded(u32),
    /// A quote was removed from favorites
    FavoriteRemoved(u32),
    /// The pool was exhausted and favorites were cleared
    FavoritesReset,
    /// The notification time preference changed
    NotificationTimeChanged(String),
    /// The notifications-enabled preference changed
    NotificationsToggled(bool),
}

/// Outcome of a share attempt
///
/// Returned so callers *can* observe the result, but the store's contract
/// never depends on it: failure has already been logged and no state
/// changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform accepted the payload
    Completed,
    /// The platform declined or failed; already logged
    Failed,
}

/// Owner of all quote state
///
/// Constructed once at startup over the restored persisted record and
/// passed by reference to consumers; there is no ambient global. The
/// daily quote starts unset and is populated by the first call to
/// [`QuoteStore::select_daily_quote`].
pub struct QuoteStore {
    catalog: Catalog,
    persisted: PersistedRecord<PersistedQuoteState>,
    daily: RwLock<Option<Quote>>,
    random: Mutex<Box<dyn RandomSource>>,
    share: Arc<dyn ShareTarget>,
    daily_tx: watch::Sender<Option<Quote>>,
    events_tx: broadcast::Sender<StoreEvent>,
}

impl QuoteStore {
    /// Create a store over a restored persisted record
    ///
    /// Defaults to the built-in catalog, the thread-local random source,
    /// and the logging share target; use the `with_` methods to swap
    /// collaborators.
    pub fn new(persisted: PersistedRecord<PersistedQuoteState>) -> Self {
        let (daily_tx, _) = watch::channel(None);
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        QuoteStore {
            catalog: Catalog::built_in(),
            persisted,
            daily: RwLock::new(None),
            random: Mutex::new(Box::new(ThreadRandom::new())),
            share: Arc::new(LogShare::new()),
            daily_tx,
            events_tx,
        }
    }

    /// Replace the catalog
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the random source
    pub fn with_random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Mutex::new(Box::new(random));
        self
    }

    /// Replace the share target
    pub fn with_share(mut self, share: Arc<dyn ShareTarget>) -> Self {
        self.share = share;
        self
    }

    /// Select a new daily quote
    ///
    /// Draws uniformly from the catalog entries not in favorites. When the
    /// pool is exhausted, favorites are cleared and the draw falls back to
    /// the entire catalog; the first quote of the fresh cycle may coincide
    /// with one the reset just released. Always returns a quote.
    pub async fn select_daily_quote(&self) -> Quote {
        let favorites = self.persisted.read(|s| s.favorites.clone()).await;

        let selection = {
            let mut random = self.random.lock().await;
            next_daily(&self.catalog, &favorites, random.as_mut())
        };

        if selection.is_cycle_reset() {
            debug!("quote pool exhausted, resetting favorites");
            if let Err(error) = self.persisted.update(|s| s.favorites.clear()).await {
                warn!(%error, "failed to persist favorites reset");
            }
            let _ = self.events_tx.send(StoreEvent::FavoritesReset);
        }

        let quote = selection.quote().clone();

        *self.daily.write().await = Some(quote.clone());
        self.daily_tx.send_replace(Some(quote.clone()));
        let _ = self.events_tx.send(StoreEvent::DailyQuoteChanged(quote.clone()));

        debug!(id = quote.id, "daily quote selected");
        quote
    }

    /// Toggle the daily quote's favorite status
    ///
    /// With no daily quote set this is a silent no-op. Otherwise the flag
    /// flip always applies to the current daily quote; only the removal
    /// path keys off the caller-supplied id. Shipped callers pass the
    /// daily quote's own id.
    pub async fn toggle_favorite(&self, id: u32) {
        let mut daily = self.daily.write().await;
        let Some(quote) = daily.as_mut() else {
            debug!(id, "favorite toggle ignored, no daily quote set");
            return;
        };

        let now_favorite = !quote.is_favorite;
        quote.is_favorite = now_favorite;
        let snapshot = quote.clone();
        drop(daily);

        let result = self
            .persisted
            .update(|state| {
                if now_favorite {
                    state.favorites.insert(&snapshot);
                } else {
                    state.favorites.remove(id);
                }
            })
            .await;
        if let Err(error) = result {
            warn!(%error, "failed to persist favorites");
        }

        self.daily_tx.send_replace(Some(snapshot.clone()));
        let event = if now_favorite {
            StoreEvent::FavoriteAdded(snapshot.id)
        } else {
            StoreEvent::FavoriteRemoved(id)
        };
        let _ = self.events_tx.send(event);
        let _ = self.events_tx.send(StoreEvent::DailyQuoteChanged(snapshot));
    }

    /// Share a quote through the platform facility
    ///
    /// Formats the payload, hands it off, and awaits only to decide what
    /// to log. Never alters store state.
    pub async fn share_quote(&self, quote: &Quote) -> ShareOutcome {
        let payload = quote_share_text(&quote.text, &quote.author);

        match self.share.share_text(&payload).await {
            Ok(()) => {
                debug!(id = quote.id, "quote shared");
                ShareOutcome::Completed
            }
            Err(error) => {
                warn!(id = quote.id, %error, "sharing failed");
                ShareOutcome::Failed
            }
        }
    }

    /// Set the daily notification time
    ///
    /// The value is caller-supplied and stored verbatim.
    pub async fn set_notification_time(&self, time: impl Into<String>) {
        let time = time.into();

        if let Err(error) = self
            .persisted
            .update(|s| s.notification_time = time.clone())
            .await
        {
            warn!(%error, "failed to persist notification time");
        }
        let _ = self
            .events_tx
            .send(StoreEvent::NotificationTimeChanged(time));
    }

    /// Enable or disable daily notifications
    pub async fn set_notifications_enabled(&self, enabled: bool) {
        if let Err(error) = self
            .persisted
            .update(|s| s.notifications_enabled = enabled)
            .await
        {
            warn!(%error, "failed to persist notifications flag");
        }
        let _ = self.events_tx.send(StoreEvent::NotificationsToggled(enabled));
    }

    /// The current daily quote, if one has been selected
    pub async fn daily_quote(&self) -> Option<Quote> {
        self.daily.read().await.clone()
    }

    /// Snapshot of the favorites in insertion order
    pub async fn favorites(&self) -> Vec<Quote> {
        self.persisted
            .read(|s| s.favorites.as_slice().to_vec())
            .await
    }

    /// The fixed category enumeration, in display order
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// The quote catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configured notification time
    pub async fn notification_time(&self) -> String {
        self.persisted.read(|s| s.notification_time.clone()).await
    }

    /// Whether daily notifications are enabled
    pub async fn notifications_enabled(&self) -> bool {
        self.persisted.read(|s| s.notifications_enabled).await
    }

    /// Watch the daily quote
    ///
    /// The receiver yields the current value immediately and every change
    /// afterwards (new selections and favorite-flag flips).
    pub fn subscribe_daily(&self) -> watch::Receiver<Option<Quote>> {
        self.daily_tx.subscribe()
    }

    /// Subscribe to store events
    pub fn subscribe_events(&self) -> broadcast::Receiver<StoreEvent> {
        self.events_tx.subscribe()
    }

    /// Flush pending persistence writes
    ///
    /// Called on process exit or backgrounding; failure is logged and
    /// swallowed like every other storage failure.
    pub fn flush(&self) {
        if let Err(error) = self.persisted.flush() {
            warn!(%error, "failed to flush persisted state");
        }
    }
}
