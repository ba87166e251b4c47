use axum::{Router, extract::FromRef, http::HeaderName, middleware};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// The authorization subsystem, leaves first: decoding, the gate, the guard.
pub mod session;
pub mod gate;
pub mod guard;
pub mod registry;

// Application plumbing.
pub mod config;
pub mod handlers;
pub mod models;

// Routing segregation: one module per protected section plus the public
// surface.
pub mod routes;
use routes::{admin, agency, employee, employer, public, recruiting};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use registry::RoleRegistry;

/// ApiDoc
///
/// Aggregates the OpenAPI documentation for every annotated handler and
/// schema. Served as JSON at `/api-docs/openapi.json` and browsable at
/// `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root_entry, handlers::login_page, handlers::unauthorized_page,
        handlers::dashboard_page, handlers::admin_home, handlers::admin_tenants,
        handlers::agency_home, handlers::agency_placements, handlers::employer_home,
        handlers::employer_staff, handlers::employee_home, handlers::employee_profile,
        handlers::recruiting_entry, handlers::candidate_home, handlers::recruiter_console,
    ),
    components(schemas(models::SectionContext, models::PortalNotice)),
    tags(
        (name = "workforce-portal", description = "Multi-tenant workforce dashboard API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe container shared across all requests: the loaded
/// configuration and the two role registries. Everything in it is immutable
/// after startup, so concurrent reads need no synchronization.
#[derive(Clone)]
pub struct AppState {
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
    /// Workforce role-to-landing-path table (single source of truth for the
    /// root entry point).
    pub registry: Arc<RoleRegistry>,
    /// The recruiting area's own table. Kept separate from `registry` so
    /// the two role vocabularies never merge.
    pub recruiting: Arc<RoleRegistry>,
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the routing structure: public surface, one guarded router per
/// section (guard and routes defined side by side in each section module),
/// and the observability layers. The guard is attached with `route_layer`,
/// so it runs for matched section routes only.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // Guards are configured once, here, from the same config the rest of
    // the app sees.
    let config = state.config.clone();

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public surface: no guard.
        .merge(public::public_routes())
        // Workforce sections, each behind its own section guard.
        .merge(admin::admin_routes().route_layer(middleware::from_fn_with_state(
            admin::section_guard(&config),
            guard::enforce,
        )))
        .merge(agency::agency_routes().route_layer(middleware::from_fn_with_state(
            agency::section_guard(&config),
            guard::enforce,
        )))
        .merge(employer::employer_routes().route_layer(middleware::from_fn_with_state(
            employer::section_guard(&config),
            guard::enforce,
        )))
        // Nested resource routes carry a tighter allow-list than their
        // parent section.
        .merge(employer::staff_routes().route_layer(middleware::from_fn_with_state(
            employer::staff_guard(&config),
            guard::enforce,
        )))
        .merge(employee::employee_routes().route_layer(middleware::from_fn_with_state(
            employee::section_guard(&config),
            guard::enforce,
        )))
        // Recruiting area: disjoint vocabulary, same gate machinery.
        .merge(recruiting::entry_routes().route_layer(middleware::from_fn_with_state(
            recruiting::section_guard(&config),
            guard::enforce,
        )))
        .merge(recruiting::candidate_routes().route_layer(middleware::from_fn_with_state(
            recruiting::candidate_guard(&config),
            guard::enforce,
        )))
        .merge(recruiting::console_routes().route_layer(middleware::from_fn_with_state(
            recruiting::console_guard(&config),
            guard::enforce,
        )))
        .with_state(state);

    // Observability and correlation layers, outermost: request id
    // generation, tracing spans keyed by that id, id propagation back to
    // the client.
    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Customizes `TraceLayer` span creation so every log line for one request
/// is correlated by the generated `x-request-id`, alongside the method and
/// URI. Credential contents never appear here.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
