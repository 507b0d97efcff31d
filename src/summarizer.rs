//! Conversation summarizer.

use std::sync::Arc;

use tracing::info;

use crate::context::{ConversationContext, HistoryEntry};
use crate::error::ModelError;
use crate::models::{GenerationParams, TextGenerator};

/// Returned instead of a model call when there is nothing to summarize.
pub const NO_HISTORY_MESSAGE: &str = "No conversation history to summarize.";

const SUMMARY_PREFIX: &str = "Summarize this conversation: ";

/// Decoding parameters for summaries: longer output, warmer sampling.
pub fn summary_params() -> GenerationParams {
    GenerationParams::new(100, 0.7)
}

pub struct Summarizer {
    llm: Arc<dyn TextGenerator>,
    context: Arc<ConversationContext>,
    params: GenerationParams,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn TextGenerator>, context: Arc<ConversationContext>) -> Self {
        Self {
            llm,
            context,
            params: summary_params(),
        }
    }

    pub async fn summarize(&self) -> Result<String, ModelError> {
        let entries = self.context.entries().await;
        if entries.is_empty() {
            return Ok(NO_HISTORY_MESSAGE.to_string());
        }

        info!(entries = entries.len(), "Summarizing conversation");
        let prompt = build_prompt(&entries);
        let text = self.llm.generate(&prompt, &self.params).await?;
        Ok(text.trim().to_string())
    }
}

/// `"Summarize this conversation: User: q1\nAssistant: r1\nUser: q2\n..."`
pub fn build_prompt(entries: &[HistoryEntry]) -> String {
    let transcript = entries
        .iter()
        .map(|e| format!("User: {}\nAssistant: {}", e.query, e.response))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{SUMMARY_PREFIX}{transcript}")
}
