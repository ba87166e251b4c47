use crate::{
    AppState,
    config::AppConfig,
    gate::AllowList,
    guard::SectionGuard,
    handlers,
    models::Role,
};
use axum::{Router, routing::get};

/// Employer Router Module
///
/// The employer section carries two guards: the section-wide one, and a
/// tighter one over the nested staff-management area. External contacts may
/// browse the employer home but never reach staff management; the nested
/// allow-list is stated here, next to the section-wide one.
pub fn employer_routes() -> Router<AppState> {
    Router::new()
        // GET /employer
        // Employer dashboard home.
        .route("/employer", get(handlers::employer_home))
}

/// Nested resource routes, mounted behind `staff_guard`.
pub fn staff_routes() -> Router<AppState> {
    Router::new()
        // GET /employer/staff
        // Staff management.
        .route("/employer/staff", get(handlers::employer_staff))
}

pub fn section_guard(config: &AppConfig) -> SectionGuard {
    SectionGuard::new(
        "employer",
        AllowList::new([Role::EMPLOYER_ADMIN, Role::MANAGER, Role::CONTACT]),
    )
    .configured(config)
}

pub fn staff_guard(config: &AppConfig) -> SectionGuard {
    SectionGuard::new(
        "employer/staff",
        AllowList::new([Role::EMPLOYER_ADMIN, Role::MANAGER]),
    )
    .configured(config)
}
