//! Application state management for Luminary
//!
//! This crate provides the quote store: the single owner of the daily
//! quote, the favorites collection, and the notification preferences.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::{QuoteStore, ShareOutcome, StoreEvent};
