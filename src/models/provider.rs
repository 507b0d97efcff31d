//! Capability traits for the model collaborators.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Decoding parameters for a single generation call.
///
/// `None` fields are left to the model's defaults and omitted on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    /// Upper bound on generated length, in tokens.
    #[serde(rename = "max_new_tokens")]
    pub max_length: u32,
    pub num_return_sequences: u32,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_token_id: Option<u32>,
}

impl GenerationParams {
    pub fn new(max_length: u32, temperature: f32) -> Self {
        Self {
            max_length,
            num_return_sequences: 1,
            temperature,
            top_p: None,
            repetition_penalty: None,
            pad_token_id: None,
        }
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_repetition_penalty(mut self, penalty: f32) -> Self {
        self.repetition_penalty = Some(penalty);
        self
    }

    pub fn with_pad_token_id(mut self, id: u32) -> Self {
        self.pad_token_id = Some(id);
        self
    }
}

/// A sentiment label with the classifier's confidence in it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentScore {
    pub label: String,
    pub score: f64,
}

/// Generative text model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn model_name(&self) -> &str;

    /// Generate text for `prompt`. Returns the raw (untrimmed) output.
    async fn generate(&self, prompt: &str, params: &GenerationParams)
    -> Result<String, ModelError>;
}

/// Sentiment classification model.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    fn model_name(&self) -> &str;

    /// Top label for `text`.
    async fn classify(&self, text: &str) -> Result<SentimentScore, ModelError>;
}
