//! Platform-specific facilities for Luminary
//!
//! This crate holds the seams to platform services the core consumes,
//! currently the text-sharing facility.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod share;

pub use share::{quote_share_text, LogShare, ShareError, ShareTarget};
