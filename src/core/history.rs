//! In-memory log of completed translations

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::core::models::Translation;

/// Append-only translation log shared by clones of a translator
#[derive(Debug, Clone, Default)]
pub struct TranslationLog {
    entries: Arc<RwLock<Vec<Translation>>>,
}

impl TranslationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed translation
    pub async fn push(&self, translation: Translation) {
        let mut entries = self.entries.write().await;
        entries.push(translation);
        debug!("Recorded translation #{}", entries.len());
    }

    /// Snapshot of all entries in completion order
    pub async fn all(&self) -> Vec<Translation> {
        self.entries.read().await.clone()
    }

    /// Number of recorded translations
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when nothing has been recorded
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Most recent entry
    pub async fn latest(&self) -> Option<Translation> {
        self.entries.read().await.last().cloned()
    }

    /// Drop every entry and return how many there were. Unrecoverable.
    pub async fn clear(&self) -> usize {
        let mut entries = self.entries.write().await;
        let dropped = entries.len();
        entries.clear();
        info!("Cleared {} translations", dropped);
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::TranslatorOptions;

    fn record(text: &str) -> Translation {
        Translation::new(&TranslatorOptions::default(), text, text.to_uppercase())
    }

    #[tokio::test]
    async fn test_push_and_latest() {
        let log = TranslationLog::new();
        assert!(log.is_empty().await);
        assert_eq!(log.latest().await, None);

        log.push(record("a")).await;
        log.push(record("b")).await;

        assert_eq!(log.len().await, 2);
        assert_eq!(log.latest().await.unwrap().input_text, "b");

        let texts: Vec<_> = log.all().await.into_iter().map(|t| t.input_text).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_clear() {
        let log = TranslationLog::new();
        log.push(record("a")).await;
        log.push(record("b")).await;
        assert_eq!(log.clear().await, 2);
        assert_eq!(log.clear().await, 0);

        assert_eq!(log.len().await, 0);
        assert_eq!(log.latest().await, None);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let log = TranslationLog::new();
        let other = log.clone();
        other.push(record("shared")).await;
        assert_eq!(log.len().await, 1);
    }
}
