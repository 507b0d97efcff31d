//! Deterministic model fakes for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::provider::{GenerationParams, SentimentClassifier, SentimentScore, TextGenerator};
use crate::error::ModelError;

/// Returns a canned reply and records every call.
pub struct StubGenerator {
    reply: String,
    pub calls: Mutex<Vec<(String, GenerationParams)>>,
}

impl StubGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn last_call(&self) -> Option<(String, GenerationParams)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn model_name(&self) -> &str {
        "stub"
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ModelError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), params.clone()));
        Ok(self.reply.clone())
    }
}

/// Always returns the same label and score.
pub struct StubSentiment {
    pub label: &'static str,
    pub score: f64,
}

#[async_trait]
impl SentimentClassifier for StubSentiment {
    fn model_name(&self) -> &str {
        "stub-sentiment"
    }

    async fn classify(&self, _text: &str) -> Result<SentimentScore, ModelError> {
        Ok(SentimentScore {
            label: self.label.to_string(),
            score: self.score,
        })
    }
}

/// Fails every call with an API error.
pub struct FailingModel;

fn unavailable() -> ModelError {
    ModelError::Api {
        provider: "stub".to_string(),
        status: 503,
        message: "model is loading".to_string(),
    }
}

#[async_trait]
impl TextGenerator for FailingModel {
    fn model_name(&self) -> &str {
        "failing"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, ModelError> {
        Err(unavailable())
    }
}

#[async_trait]
impl SentimentClassifier for FailingModel {
    fn model_name(&self) -> &str {
        "failing"
    }

    async fn classify(&self, _text: &str) -> Result<SentimentScore, ModelError> {
        Err(unavailable())
    }
}
