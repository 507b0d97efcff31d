//! Sentiment agent — labels the query's tone.

use std::sync::Arc;

use crate::error::ModelError;
use crate::models::SentimentClassifier;

pub struct SentimentAgent {
    model: Arc<dyn SentimentClassifier>,
}

impl SentimentAgent {
    pub fn new(model: Arc<dyn SentimentClassifier>) -> Self {
        Self { model }
    }

    /// `"Sentiment: {label}, Confidence: {score:.2}"`
    pub async fn analyze(&self, query: &str) -> Result<String, ModelError> {
        let sentiment = self.model.classify(query).await?;
        Ok(format!(
            "Sentiment: {}, Confidence: {:.2}",
            sentiment.label, sentiment.score
        ))
    }
}
