use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workforce_portal::{
    AppState, RoleRegistry,
    config::{AppConfig, Env},
    create_router,
};

/// main
///
/// Asynchronous entry point: configuration, logging, the role registries,
/// and the HTTP server, in that order. Anything unbuildable here stops the
/// process before it serves a single request.
#[tokio::main]
async fn main() {
    // 1. Configuration & environment loading (fail-fast).
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging filter: RUST_LOG wins, with workable local defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "workforce_portal=debug,tower_http=info,axum=trace".into());

    // 3. Log format per environment: pretty for humans locally, JSON for
    // aggregators in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Role registries. A registry that fails validation is a
    // configuration error and must never reach request time.
    let registry = Arc::new(
        RoleRegistry::workforce(&config.fallback_landing)
            .expect("FATAL: workforce role registry is misconfigured"),
    );
    let recruiting = Arc::new(
        RoleRegistry::recruiting(&config.fallback_landing)
            .expect("FATAL: recruiting role registry is misconfigured"),
    );

    // 5. Unified state assembly.
    let app_state = AppState {
        config,
        registry,
        recruiting,
    };

    // 6. Router and server startup.
    let app = create_router(app_state);

    let listener = TcpListener::bind("0.0.0.0:3000").await.unwrap();

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on 0.0.0.0:3000");
    tracing::info!("API Documentation (Swagger UI) available at: http://localhost:3000/swagger-ui");

    axum::serve(listener, app).await.unwrap();
}
