use query_router::config::Config;
use query_router::context::ConversationContext;
use query_router::models::{create_generator, create_sentiment_classifier};
use query_router::routes::{AppState, app_routes};

#[tokio::main]
async fn main() -> query_router::error::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    let addr = config.server.bind_addr()?;

    eprintln!("🧭 Query Router v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Generation model: {}", config.models.generation_model);
    eprintln!("   Sentiment model: {}", config.models.sentiment_model);
    eprintln!("   Inference API: {}", config.models.api_base);
    eprintln!("   Listening: http://{}\n", addr);

    let llm = create_generator(&config.models)?;
    let sentiment = create_sentiment_classifier(&config.models)?;

    let state = AppState::new(llm, sentiment, ConversationContext::new());
    let app = app_routes(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "HTTP server started");
    axum::serve(listener, app).await?;

    Ok(())
}
