use crate::{
    AppState,
    config::AppConfig,
    gate::AllowList,
    guard::SectionGuard,
    handlers,
    models::Role,
};
use axum::{Router, routing::get};

/// Agency Router Module
///
/// Routes for the staffing-agency section, shared by agency administrators
/// and agents.
pub fn agency_routes() -> Router<AppState> {
    Router::new()
        // GET /agency
        // Agency dashboard home.
        .route("/agency", get(handlers::agency_home))
        // GET /agency/placements
        // Placement pipeline.
        .route("/agency/placements", get(handlers::agency_placements))
}

pub fn section_guard(config: &AppConfig) -> SectionGuard {
    SectionGuard::new("agency", AllowList::new([Role::AGENCY_ADMIN, Role::AGENT]))
        .configured(config)
}
