//! Text sharing facility
//!
//! The platform share sheet is modeled as an async trait the store calls
//! and forgets: implementations may fail (the user dismisses the sheet,
//! the platform API is missing), and callers are expected to log the
//! outcome and move on.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

/// Errors a share target can report
#[derive(Debug, Error)]
pub enum ShareError {
    /// The platform sharing facility is not available
    #[error("Share facility unavailable: {0}")]
    Unavailable(String),

    /// The user dismissed the share sheet
    #[error("Share dismissed")]
    Dismissed,

    /// The platform reported a failure
    #[error("Share failed: {0}")]
    Failed(String),
}

/// Result type for share operations
pub type Result<T> = std::result::Result<T, ShareError>;

/// A destination that can share a piece of text
///
/// Implementations wrap whatever the platform offers: a native share
/// sheet, a clipboard, a logger. Failure never carries state; it only
/// decides what the caller logs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Hand the text to the platform sharing facility
    async fn share_text(&self, text: &str) -> Result<()>;
}

/// Format a quote for sharing
///
/// Produces `"<text>" — <author>`, the shape the original share sheet
/// received.
pub fn quote_share_text(text: &str, author: &str) -> String {
    format!("\"{text}\" — {author}")
}

/// Share target that logs the payload instead of presenting a sheet
///
/// Stands in wherever no native share integration is wired up; always
/// succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogShare;

impl LogShare {
    /// Create a logging share target
    pub fn new() -> Self {
        LogShare
    }
}

#[async_trait]
impl ShareTarget for LogShare {
    async fn share_text(&self, text: &str) -> Result<()> {
        info!(payload = text, "share requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_share_text_format() {
        let text = quote_share_text("The mind is everything.", "Buddha");
        assert_eq!(text, "\"The mind is everything.\" — Buddha");
    }

    #[test]
    fn test_quote_share_text_keeps_inner_quotes() {
        let text = quote_share_text("Say \"yes\".", "Anon");
        assert_eq!(text, "\"Say \"yes\".\" — Anon");
    }

    #[tokio::test]
    async fn test_log_share_always_succeeds() {
        let target = LogShare::new();
        assert!(target.share_text("anything").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_share_target_can_fail() {
        let mut mock = MockShareTarget::new();
        mock.expect_share_text()
            .returning(|_| Err(ShareError::Dismissed));

        let result = mock.share_text("payload").await;
        assert!(matches!(result, Err(ShareError::Dismissed)));
    }

    #[test]
    fn test_share_error_display() {
        assert_eq!(ShareError::Dismissed.to_string(), "Share dismissed");
        assert_eq!(
            ShareError::Unavailable("no sheet".to_string()).to_string(),
            "Share facility unavailable: no sheet"
        );
    }
}
