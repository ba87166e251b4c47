use crate::{
    AppState,
    config::AppConfig,
    gate::AllowList,
    guard::SectionGuard,
    handlers,
    models::Role,
};
use axum::{Router, routing::get};

/// Admin Router Module
///
/// Routes for the platform-administration section. Only `super_admin` may
/// enter; the guard is applied in `create_router` as a `route_layer` over
/// exactly this router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin
        // Administration home.
        .route("/admin", get(handlers::admin_home))
        // GET /admin/tenants
        // Tenant management.
        .route("/admin/tenants", get(handlers::admin_tenants))
}

/// The section's guard: its identifier and allow-list, with deny targets and
/// environment switches taken from configuration.
pub fn section_guard(config: &AppConfig) -> SectionGuard {
    SectionGuard::new("admin", AllowList::new([Role::SUPER_ADMIN])).configured(config)
}
