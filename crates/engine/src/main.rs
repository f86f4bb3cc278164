//! Geoward engine - main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geoward_engine::api::auth::{USER_ID_HEADER, USER_ROLE_HEADER};
use geoward_engine::api::http;
use geoward_engine::app::{App, Repositories};
use geoward_engine::config::{load_dotenv_from_repo_root, EngineConfig, StorageBackend};
use geoward_engine::infrastructure::{
    clock::SystemClock,
    memory::MemoryRepositories,
    neo4j::{ensure_schema, Neo4jRepositories},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoward_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Geoward Engine");

    let config = EngineConfig::from_env()?;

    let repositories: Repositories = match config.storage {
        StorageBackend::Neo4j => {
            tracing::info!("Connecting to Neo4j at {}", config.neo4j_uri);
            let graph = neo4rs::Graph::new(
                &config.neo4j_uri,
                &config.neo4j_user,
                &config.neo4j_password,
            )
            .await?;

            // Ensure database schema (constraints and indexes)
            ensure_schema(&graph).await?;
            Neo4jRepositories::new(graph).into()
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            MemoryRepositories::new().into()
        }
    };

    let app = Arc::new(App::new(repositories, Arc::new(SystemClock::new())));

    let mut router = http::router(app);
    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins?;

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        // Identity headers and JSON bodies trigger CORS preflights.
        .allow_headers([
            HeaderName::from_static(USER_ID_HEADER),
            HeaderName::from_static(USER_ROLE_HEADER),
            axum::http::header::CONTENT_TYPE,
        ]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
