//! Roster Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_engine::{
    api,
    infrastructure::config::{CorsOrigins, EngineConfig},
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster Engine");

    let config = EngineConfig::from_env();
    tracing::info!(
        store = ?config.store,
        default_page_size = config.default_page_size,
        allow_empty_title = config.rules.allow_empty_title,
        "Configuration loaded"
    );

    let app = Arc::new(App::from_config(&config).await?);

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(&config.cors_origins) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn cors_layer(origins: &CorsOrigins) -> Option<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    match origins {
        CorsOrigins::Disabled => None,
        CorsOrigins::Any => Some(cors.allow_origin(Any)),
        CorsOrigins::List(list) => {
            let origins: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            if origins.is_empty() {
                None
            } else {
                Some(cors.allow_origin(origins))
            }
        }
    }
}
