//! Conversation context — the shared, append-only exchange log.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// One completed exchange. Never mutated after it is recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub query: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
            created_at: Utc::now(),
        }
    }
}

/// In-memory conversation log shared by every caller of the service.
///
/// Each call takes the lock for its own duration only. Nothing groups a
/// dispatch with its append, so concurrent requests land in completion order
/// and a `clear` can interleave with an in-flight dispatch.
#[derive(Debug, Default)]
pub struct ConversationContext {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl ConversationContext {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn append(&self, entry: HistoryEntry) {
        let mut entries = self.entries.write().await;
        entries.push(entry);
        debug!(len = entries.len(), "History entry appended");
    }

    /// Snapshot of every entry in append order.
    pub async fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.read().await.clone()
    }

    /// Drop all entries. Idempotent.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        let dropped = entries.len();
        entries.clear();
        info!(dropped, "Conversation context cleared");
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
