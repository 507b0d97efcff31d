//! HTTP surface: `/chat`, `/summary`, `/status`, `/reset`, `/history`.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::agents::Agents;
use crate::classifier::IntentClassifier;
use crate::context::ConversationContext;
use crate::dispatcher::Dispatcher;
use crate::error::DispatchError;
use crate::models::{SentimentClassifier, TextGenerator};
use crate::summarizer::Summarizer;

pub const STATUS_MESSAGE: &str = "API is running smoothly!";
pub const RESET_MESSAGE: &str = "Conversation context has been reset.";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    /// Wire the dispatcher and summarizer around one shared context.
    pub fn new(
        llm: Arc<dyn TextGenerator>,
        sentiment: Arc<dyn SentimentClassifier>,
        context: Arc<ConversationContext>,
    ) -> Self {
        let agents = Agents::new(Arc::clone(&llm), sentiment);
        let dispatcher = Dispatcher::new(
            IntentClassifier::default_rules(),
            agents,
            Arc::clone(&context),
        );
        let summarizer = Summarizer::new(llm, context);
        Self {
            dispatcher: Arc::new(dispatcher),
            summarizer: Arc::new(summarizer),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Build the Axum router.
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/summary", post(summary))
        .route("/status", get(status))
        .route("/reset", post(reset))
        .route("/history", get(history))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

// ── Chat ────────────────────────────────────────────────────────────────

async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, DispatchError> {
    let outcome = state
        .dispatcher
        .dispatch(&body.query, body.category.as_deref())
        .await?;
    Ok(Json(ChatResponse {
        response: outcome.response,
    }))
}

async fn summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, DispatchError> {
    let summary = state.summarizer.summarize().await?;
    Ok(Json(SummaryResponse { summary }))
}

// ── Housekeeping ────────────────────────────────────────────────────────

async fn status() -> impl IntoResponse {
    Json(serde_json::json!({ "status": STATUS_MESSAGE }))
}

async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    state.dispatcher.reset().await;
    info!("Conversation reset via API");
    Json(serde_json::json!({ "message": RESET_MESSAGE }))
}

async fn history(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dispatcher.context().entries().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::models::testing::{FailingModel, StubGenerator, StubSentiment};

    fn app() -> Router {
        app_routes(AppState::new(
            Arc::new(StubGenerator::new("an answer")),
            Arc::new(StubSentiment {
                label: "NEGATIVE",
                score: 0.88,
            }),
            ConversationContext::new(),
        ))
    }

    async fn json_body(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn status_is_fixed() {
        let req = Request::builder()
            .uri("/status")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await["status"], STATUS_MESSAGE);
    }

    #[tokio::test]
    async fn chat_sentiment_route() {
        let res = app()
            .oneshot(post_json(
                "/chat",
                serde_json::json!({"query": "I am so angry"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            json_body(res).await["response"],
            "Sentiment: NEGATIVE, Confidence: 0.88"
        );
    }

    #[tokio::test]
    async fn chat_empty_query_is_400() {
        let res = app()
            .oneshot(post_json("/chat", serde_json::json!({"query": ""})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(res).await["detail"], "Query cannot be empty");
    }

    #[tokio::test]
    async fn chat_model_failure_is_500() {
        let app = app_routes(AppState::new(
            Arc::new(FailingModel),
            Arc::new(FailingModel),
            ConversationContext::new(),
        ));
        let res = app
            .oneshot(post_json(
                "/chat",
                serde_json::json!({"query": "how does it work", "category": "knowledge"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let detail = json_body(res).await["detail"].as_str().unwrap().to_string();
        assert!(detail.starts_with("An error occurred: "));
        assert!(detail.contains("model is loading"));
    }

    #[tokio::test]
    async fn chat_missing_query_field_is_rejected_by_extractor() {
        let res = app()
            .oneshot(post_json("/chat", serde_json::json!({"category": "knowledge"})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
