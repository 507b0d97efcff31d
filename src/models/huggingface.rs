//! Hugging Face Inference API client.
//!
//! One `POST {api_base}/{model_id}` per call, body `{"inputs", "parameters", "options"}`.
//! Text generation answers `[{"generated_text": ...}]`; sentiment answers a
//! list of `{label, score}` candidates, sometimes nested one level deeper.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::provider::{GenerationParams, SentimentClassifier, SentimentScore, TextGenerator};
use crate::error::ModelError;

const PROVIDER: &str = "huggingface";

#[derive(Debug, Serialize)]
struct InferenceRequest<'a, P: Serialize> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<P>,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SentimentResponse {
    Nested(Vec<Vec<SentimentScore>>),
    Flat(Vec<SentimentScore>),
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Shared HTTP plumbing for one hosted model.
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Client,
    api_base: String,
    api_token: Option<SecretString>,
    model: String,
}

impl HuggingFaceClient {
    pub fn new(
        api_base: impl Into<String>,
        model: impl Into<String>,
        api_token: Option<SecretString>,
        timeout: Option<Duration>,
    ) -> Result<Self, ModelError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ModelError::RequestFailed {
            provider: PROVIDER.to_string(),
            reason: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_token,
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.api_base, self.model)
    }

    async fn infer<P, R>(&self, inputs: &str, parameters: Option<P>) -> Result<R, ModelError>
    where
        P: Serialize,
        R: for<'de> Deserialize<'de>,
    {
        let body = InferenceRequest {
            inputs,
            parameters,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        debug!(model = %self.model, "Inference request");

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ModelError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ModelError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: format!("Failed to read response body: {}", e),
            })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            return Err(ModelError::Api {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| ModelError::InvalidResponse {
            provider: PROVIDER.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Text generation backed by the Inference API.
pub struct HuggingFaceGenerator {
    inner: HuggingFaceClient,
}

impl HuggingFaceGenerator {
    pub fn new(inner: HuggingFaceClient) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    fn model_name(&self) -> &str {
        self.inner.model()
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ModelError> {
        let outputs: Vec<GeneratedText> = self.inner.infer(prompt, Some(params)).await?;
        first_generation(outputs)
    }
}

/// Sentiment classification backed by the Inference API.
pub struct HuggingFaceSentiment {
    inner: HuggingFaceClient,
}

impl HuggingFaceSentiment {
    pub fn new(inner: HuggingFaceClient) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SentimentClassifier for HuggingFaceSentiment {
    fn model_name(&self) -> &str {
        self.inner.model()
    }

    async fn classify(&self, text: &str) -> Result<SentimentScore, ModelError> {
        let response: SentimentResponse = self.inner.infer::<(), _>(text, None).await?;
        top_sentiment(response)
    }
}

fn first_generation(outputs: Vec<GeneratedText>) -> Result<String, ModelError> {
    outputs
        .into_iter()
        .next()
        .map(|o| o.generated_text)
        .ok_or_else(|| ModelError::EmptyOutput {
            provider: PROVIDER.to_string(),
        })
}

fn top_sentiment(response: SentimentResponse) -> Result<SentimentScore, ModelError> {
    let candidates = match response {
        SentimentResponse::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
        SentimentResponse::Flat(flat) => flat,
    };
    candidates
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| ModelError::EmptyOutput {
            provider: PROVIDER.to_string(),
        })
}
