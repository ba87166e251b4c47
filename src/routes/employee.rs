use crate::{
    AppState,
    config::AppConfig,
    gate::AllowList,
    guard::SectionGuard,
    handlers,
    models::Role,
};
use axum::{Router, routing::get};

/// Employee Router Module
///
/// Self-service routes for individual employees.
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/employee", get(handlers::employee_home))
        .route("/employee/profile", get(handlers::employee_profile))
}

pub fn section_guard(config: &AppConfig) -> SectionGuard {
    SectionGuard::new("employee", AllowList::new([Role::EMPLOYEE])).configured(config)
}
