//! Core domain types and rules for Luminary
//!
//! This crate provides the quote catalog, the favorites collection, the
//! daily-quote selection rule, and the swipe release verdict.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod favorites;
pub mod gesture;
pub mod quote;
pub mod random;
pub mod selection;

pub use catalog::Catalog;
pub use favorites::FavoriteSet;
pub use gesture::{release_verdict, SwipeVerdict, SWIPE_THRESHOLD_RATIO};
pub use quote::{Category, Quote};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use selection::{next_daily, Selection};
