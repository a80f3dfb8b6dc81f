//! Clipboard access
//!
//! The query module copies through [`ClipboardProvider`] so tests and
//! headless hosts can swap in their own implementation.

use crate::error::ClipboardError;
use async_trait::async_trait;
use std::sync::Mutex;

/// Something that can receive copied text
#[async_trait]
pub trait ClipboardProvider: Send + Sync {
    /// Write `text`; resolves once the write completed
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard
///
/// The platform handle is opened for a single write and dropped right
/// after, whether or not the write succeeded.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardProvider for SystemClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteRejected(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))?
    }
}

/// In-process clipboard that remembers what was copied
///
/// Useful for hosts without a display and for tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text, if any
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ClipboardProvider for MemoryClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}
