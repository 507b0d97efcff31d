//! Model collaborators.
//!
//! Agents talk to models only through the [`TextGenerator`] and
//! [`SentimentClassifier`] traits. The stock implementations call the
//! Hugging Face Inference API; tests plug in deterministic fakes.

pub mod huggingface;
pub mod provider;
#[cfg(test)]
pub(crate) mod testing;

pub use huggingface::{HuggingFaceClient, HuggingFaceGenerator, HuggingFaceSentiment};
pub use provider::*;

use std::sync::Arc;

use crate::config::ModelConfig;
use crate::error::ModelError;

/// Create the generative model collaborator from configuration.
pub fn create_generator(config: &ModelConfig) -> Result<Arc<dyn TextGenerator>, ModelError> {
    let client = HuggingFaceClient::new(
        &config.api_base,
        &config.generation_model,
        config.api_token.clone(),
        config.timeout,
    )?;
    tracing::info!("Using text generation model: {}", config.generation_model);
    Ok(Arc::new(HuggingFaceGenerator::new(client)))
}

/// Create the sentiment model collaborator from configuration.
pub fn create_sentiment_classifier(
    config: &ModelConfig,
) -> Result<Arc<dyn SentimentClassifier>, ModelError> {
    let client = HuggingFaceClient::new(
        &config.api_base,
        &config.sentiment_model,
        config.api_token.clone(),
        config.timeout,
    )?;
    tracing::info!("Using sentiment model: {}", config.sentiment_model);
    Ok(Arc::new(HuggingFaceSentiment::new(client)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_generator_uses_configured_model() {
        let config = ModelConfig::default();
        let generator = create_generator(&config).unwrap();
        assert_eq!(generator.model_name(), "google/flan-t5-small");
    }

    #[test]
    fn create_sentiment_with_token_still_constructs() {
        // The token is only checked by the remote end, on first request.
        let config = ModelConfig {
            api_token: Some(secrecy::SecretString::from("hf_test".to_string())),
            sentiment_model: "custom/sentiment".to_string(),
            ..ModelConfig::default()
        };
        let classifier = create_sentiment_classifier(&config).unwrap();
        assert_eq!(classifier.model_name(), "custom/sentiment");
    }
}
