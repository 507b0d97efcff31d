//! Request dispatcher — validate, route, record.
//!
//! A request moves through validation, category resolution, agent execution
//! and the history append. Validation failures stop before any agent runs;
//! agent failures stop before the append, so history only ever holds
//! completed exchanges.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::agents::Agents;
use crate::classifier::{Category, IntentClassifier};
use crate::context::{ConversationContext, HistoryEntry};
use crate::error::DispatchError;

/// Result of a successful dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub category: Category,
    pub response: String,
}

pub struct Dispatcher {
    classifier: IntentClassifier,
    agents: Agents,
    context: Arc<ConversationContext>,
}

impl Dispatcher {
    pub fn new(
        classifier: IntentClassifier,
        agents: Agents,
        context: Arc<ConversationContext>,
    ) -> Self {
        Self {
            classifier,
            agents,
            context,
        }
    }

    pub fn context(&self) -> &Arc<ConversationContext> {
        &self.context
    }

    /// Handle one chat query.
    ///
    /// An empty `category` string is treated the same as no category.
    pub async fn dispatch(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<ChatOutcome, DispatchError> {
        let request_id = Uuid::new_v4();

        if query.trim().is_empty() {
            warn!(%request_id, "Rejected empty query");
            return Err(DispatchError::EmptyQuery);
        }
        let query = query.to_lowercase();

        let category = match category.filter(|c| !c.is_empty()) {
            Some(raw) => raw.parse::<Category>().map_err(|given| {
                warn!(%request_id, category = %given, "Rejected unknown category");
                DispatchError::InvalidCategory
            })?,
            None => self.classifier.classify(&query),
        };

        info!(%request_id, %category, "Dispatching query");

        let response = match self.agents.respond(category, &query).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(%request_id, %category, error = %e, "Agent failed");
                return Err(e.into());
            }
        };

        self.context
            .append(HistoryEntry::new(query, response.clone()))
            .await;

        Ok(ChatOutcome { category, response })
    }

    /// Drop the whole conversation history.
    pub async fn reset(&self) {
        self.context.clear().await;
    }
}
