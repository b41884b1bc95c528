//! Storage layer for Luminary
//!
//! This crate provides the durable key-value facility, the persisted
//! record wrapper, and the persisted state schema.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app_state;
pub mod kv;
pub mod persistence;

pub use app_state::{open_quote_state, PersistedQuoteState, QUOTE_STORAGE_KEY};
pub use kv::{KvConfig, KvError, KvStore};
pub use persistence::PersistedRecord;
