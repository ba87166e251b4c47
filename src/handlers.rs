use axum::{Json, extract::State, http::HeaderMap, response::Redirect};

use crate::{
    AppState,
    models::{Identity, PortalNotice, SectionContext},
    session,
};

// --- Entry-point handlers (Redirect Resolver call sites) ---

/// root_entry
///
/// [Public Route] The application's root. An authenticated caller is routed
/// to their role's home section via the workforce registry; anyone without a
/// decodable credential goes to the login page. This is the only place the
/// resolver runs for the workforce area; section guards use their fixed
/// deny targets instead.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 303, description = "Redirect to the caller's home section or to login"))
)]
pub async fn root_entry(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    let raw = session::cookie_value(&headers);
    match session::decode(raw.as_deref()) {
        Ok(identity) => Redirect::to(state.registry.resolve_home(&identity)),
        Err(_) => Redirect::to(&state.config.login_path),
    }
}

/// recruiting_entry
///
/// [Recruiting Route] Entry point of the recruiting area. The section guard
/// has already admitted the caller, so this only resolves which recruiting
/// page is home for the role.
#[utoipa::path(
    get,
    path = "/recruiting",
    responses((status = 303, description = "Redirect to the caller's recruiting home"))
)]
pub async fn recruiting_entry(State(state): State<AppState>, identity: Identity) -> Redirect {
    Redirect::to(state.recruiting.resolve_home(&identity))
}

// --- Public notice pages ---

/// login_page
///
/// [Public Route] Landing target for unauthenticated and malformed-credential
/// denials. Sign-in itself happens in the external identity service; this
/// page only anchors the redirect.
#[utoipa::path(
    get,
    path = "/login",
    responses((status = 200, description = "Login notice", body = PortalNotice))
)]
pub async fn login_page() -> Json<PortalNotice> {
    Json(PortalNotice::new("login", "Sign in to continue."))
}

/// unauthorized_page
///
/// [Public Route] Landing target for forbidden denials.
#[utoipa::path(
    get,
    path = "/unauthorized",
    responses((status = 200, description = "Unauthorized notice", body = PortalNotice))
)]
pub async fn unauthorized_page() -> Json<PortalNotice> {
    Json(PortalNotice::new(
        "unauthorized",
        "Your account does not have access to that section.",
    ))
}

/// dashboard_page
///
/// [Public Route] Fallback landing page for roles the registry does not
/// know.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses((status = 200, description = "Generic dashboard notice", body = PortalNotice))
)]
pub async fn dashboard_page() -> Json<PortalNotice> {
    Json(PortalNotice::new("dashboard", "Welcome to the portal."))
}

// --- Protected section handlers ---
//
// These are the content-rendering boundary: each receives the identity the
// guard resolved and answers with a SectionContext the frontend builds its
// widgets from. Authorization is entirely the guard's job by the time any of
// these runs.

/// admin_home
///
/// [Admin Section] Platform administration home.
#[utoipa::path(
    get,
    path = "/admin",
    responses((status = 200, description = "Admin section context", body = SectionContext))
)]
pub async fn admin_home(identity: Identity) -> Json<SectionContext> {
    Json(SectionContext::render("admin", &identity))
}

/// admin_tenants
///
/// [Admin Section] Tenant management view.
#[utoipa::path(
    get,
    path = "/admin/tenants",
    responses((status = 200, description = "Tenant management context", body = SectionContext))
)]
pub async fn admin_tenants(identity: Identity) -> Json<SectionContext> {
    Json(SectionContext::render("admin/tenants", &identity))
}

/// agency_home
///
/// [Agency Section] Agency dashboard home.
#[utoipa::path(
    get,
    path = "/agency",
    responses((status = 200, description = "Agency section context", body = SectionContext))
)]
pub async fn agency_home(identity: Identity) -> Json<SectionContext> {
    Json(SectionContext::render("agency", &identity))
}

/// agency_placements
///
/// [Agency Section] Placement pipeline view.
#[utoipa::path(
    get,
    path = "/agency/placements",
    responses((status = 200, description = "Placement pipeline context", body = SectionContext))
)]
pub async fn agency_placements(identity: Identity) -> Json<SectionContext> {
    Json(SectionContext::render("agency/placements", &identity))
}

/// employer_home
///
/// [Employer Section] Employer dashboard home.
#[utoipa::path(
    get,
    path = "/employer",
    responses((status = 200, description = "Employer section context", body = SectionContext))
)]
pub async fn employer_home(identity: Identity) -> Json<SectionContext> {
    Json(SectionContext::render("employer", &identity))
}

/// employer_staff
///
/// [Employer Section, nested] Staff management. Mounted behind its own
/// tighter guard: contacts can see the employer home but not this view.
#[utoipa::path(
    get,
    path = "/employer/staff",
    responses((status = 200, description = "Staff management context", body = SectionContext))
)]
pub async fn employer_staff(identity: Identity) -> Json<SectionContext> {
    Json(SectionContext::render("employer/staff", &identity))
}

/// employee_home
///
/// [Employee Section] Employee self-service home.
#[utoipa::path(
    get,
    path = "/employee",
    responses((status = 200, description = "Employee section context", body = SectionContext))
)]
pub async fn employee_home(identity: Identity) -> Json<SectionContext> {
    Json(SectionContext::render("employee", &identity))
}

/// employee_profile
///
/// [Employee Section] The employee's own profile view.
#[utoipa::path(
    get,
    path = "/employee/profile",
    responses((status = 200, description = "Employee profile context", body = SectionContext))
)]
pub async fn employee_profile(identity: Identity) -> Json<SectionContext> {
    Json(SectionContext::render("employee/profile", &identity))
}

/// candidate_home
///
/// [Recruiting Section, nested] Candidate desk.
#[utoipa::path(
    get,
    path = "/recruiting/candidate",
    responses((status = 200, description = "Candidate desk context", body = SectionContext))
)]
pub async fn candidate_home(identity: Identity) -> Json<SectionContext> {
    Json(SectionContext::render("recruiting/candidate", &identity))
}

/// recruiter_console
///
/// [Recruiting Section, nested] Recruiter console, shared by recruiters and
/// recruiting admins.
#[utoipa::path(
    get,
    path = "/recruiting/console",
    responses((status = 200, description = "Recruiter console context", body = SectionContext))
)]
pub async fn recruiter_console(identity: Identity) -> Json<SectionContext> {
    Json(SectionContext::render("recruiting/console", &identity))
}
