use crate::{
    AppState,
    config::AppConfig,
    gate::AllowList,
    guard::SectionGuard,
    handlers,
    models::Role,
};
use axum::{Router, routing::get};

/// Recruiting Router Module
///
/// A separate product area with its own role vocabulary (candidate,
/// recruiter, recruiter_admin) and its own landing registry. Workforce
/// roles are not in any recruiting allow-list and recruiting roles are not
/// in any workforce allow-list; the areas only share the gate machinery.
pub fn entry_routes() -> Router<AppState> {
    Router::new()
        // GET /recruiting
        // Entry point; resolves the caller's recruiting home.
        .route("/recruiting", get(handlers::recruiting_entry))
}

pub fn candidate_routes() -> Router<AppState> {
    Router::new().route("/recruiting/candidate", get(handlers::candidate_home))
}

pub fn console_routes() -> Router<AppState> {
    Router::new().route("/recruiting/console", get(handlers::recruiter_console))
}

/// Guard over the area entry point: any recruiting role may resolve a home.
pub fn section_guard(config: &AppConfig) -> SectionGuard {
    SectionGuard::new(
        "recruiting",
        AllowList::new([Role::CANDIDATE, Role::RECRUITER, Role::RECRUITER_ADMIN]),
    )
    .configured(config)
}

pub fn candidate_guard(config: &AppConfig) -> SectionGuard {
    SectionGuard::new("recruiting/candidate", AllowList::new([Role::CANDIDATE]))
        .configured(config)
}

pub fn console_guard(config: &AppConfig) -> SectionGuard {
    SectionGuard::new(
        "recruiting/console",
        AllowList::new([Role::RECRUITER, Role::RECRUITER_ADMIN]),
    )
    .configured(config)
}
