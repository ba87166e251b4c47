use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Endpoints reachable without any credential: the health probe, the root
/// entry point, and the three navigation targets the guards redirect to.
/// Nothing here renders protected content; the notice pages are static and
/// the root entry only ever answers with a redirect.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Unauthenticated liveness probe for monitoring and load balancers.
        .route("/health", get(|| async { "ok" }))
        // GET /
        // Root entry: authenticated callers are resolved to their home
        // section, everyone else goes to /login.
        .route("/", get(handlers::root_entry))
        // GET /login
        // Deny target for missing/malformed credentials.
        .route("/login", get(handlers::login_page))
        // GET /unauthorized
        // Deny target for forbidden roles.
        .route("/unauthorized", get(handlers::unauthorized_page))
        // GET /dashboard
        // Fallback landing for unrecognized roles.
        .route("/dashboard", get(handlers::dashboard_page))
}
