//! Knowledge agent — answers general questions with the generative model.

use std::sync::Arc;

use tracing::debug;

use crate::error::ModelError;
use crate::models::{GenerationParams, TextGenerator};

/// Decoding parameters used for every knowledge answer.
pub fn answer_params() -> GenerationParams {
    GenerationParams::new(50, 0.5)
        .with_top_p(0.9)
        .with_repetition_penalty(1.5)
        .with_pad_token_id(50256)
}

pub struct KnowledgeAgent {
    llm: Arc<dyn TextGenerator>,
    params: GenerationParams,
}

impl KnowledgeAgent {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self {
            llm,
            params: answer_params(),
        }
    }

    /// Generate an answer and trim surrounding whitespace.
    pub async fn answer(&self, query: &str) -> Result<String, ModelError> {
        debug!(model = self.llm.model_name(), "Generating knowledge answer");
        let text = self.llm.generate(query, &self.params).await?;
        Ok(text.trim().to_string())
    }
}
