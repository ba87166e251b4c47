use std::borrow::Cow;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    config::{AppConfig, Env},
    gate::{self, AllowList, AuthorizationDecision},
    models::Identity,
    session,
};

/// Alternate credential carrier for local development: the same serialized
/// payload the cookie would hold, sent as a header. Only consulted when the
/// guard was configured from a `Local` environment and no cookie is present.
pub const DEBUG_SESSION_HEADER: &str = "x-auth-user";

/// SectionId
///
/// Names one protected area ("admin", "employer/staff", ...). Used for
/// structured logging of deny decisions; it never participates in the
/// authorization check itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(Cow<'static, str>);

impl SectionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for SectionId {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl core::fmt::Display for SectionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// SectionGuard
///
/// One parameterized guard instance per protected area. Each route module
/// supplies only its `(SectionId, AllowList)` pair; the decision-to-response
/// mapping lives here once, so no section can forget the malformed-cookie
/// case or pick a divergent redirect.
///
/// Decision mapping, identical for every section:
/// - `Authorized`: identity stored in request extensions, handler runs.
/// - `DenyUnauthenticated` / `DenyMalformed`: 303 to the unauthenticated
///   target (default `/login`).
/// - `DenyForbidden`: 303 to the forbidden target (default
///   `/unauthorized`).
#[derive(Debug, Clone)]
pub struct SectionGuard {
    section: SectionId,
    allow: AllowList,
    deny_unauthenticated_target: String,
    deny_forbidden_target: String,
    debug_carrier: bool,
}

impl SectionGuard {
    pub fn new(section: impl Into<SectionId>, allow: AllowList) -> Self {
        Self {
            section: section.into(),
            allow,
            deny_unauthenticated_target: "/login".to_string(),
            deny_forbidden_target: "/unauthorized".to_string(),
            debug_carrier: false,
        }
    }

    /// configured
    ///
    /// Applies process configuration: the two deny targets, and whether the
    /// `x-auth-user` debug carrier is live. The carrier is enabled for
    /// `Env::Local` only; in production the header is ignored entirely.
    pub fn configured(mut self, config: &AppConfig) -> Self {
        self.deny_unauthenticated_target = config.login_path.clone();
        self.deny_forbidden_target = config.unauthorized_path.clone();
        self.debug_carrier = config.env == Env::Local;
        self
    }

    pub fn section(&self) -> &SectionId {
        &self.section
    }

    pub fn allow(&self) -> &AllowList {
        &self.allow
    }

    /// evaluate
    ///
    /// Runs the gate for a raw credential value against this section's
    /// allow-list. Exposed separately from the middleware so the decision
    /// logic is testable without an HTTP stack.
    pub fn evaluate(&self, raw_credential: Option<&str>) -> AuthorizationDecision {
        gate::authorize(raw_credential, &self.allow)
    }

    /// The raw credential for a request: the session cookie, or (local
    /// environments only) the debug header when no cookie is present. A
    /// present cookie always wins over the header.
    fn credential_from(&self, headers: &HeaderMap) -> Option<String> {
        session::cookie_value(headers).or_else(|| {
            if !self.debug_carrier {
                return None;
            }
            headers
                .get(DEBUG_SESSION_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })
    }
}

/// enforce
///
/// The axum middleware every protected router mounts via
/// `middleware::from_fn_with_state(guard, guard::enforce)`. On success the
/// resolved `Identity` is placed in request extensions for handlers to
/// extract; on any deny the request never reaches the handler and the
/// caller sees only a navigation outcome.
pub async fn enforce(
    State(guard): State<SectionGuard>,
    mut request: Request,
    next: Next,
) -> Response {
    let raw = guard.credential_from(request.headers());

    match guard.evaluate(raw.as_deref()) {
        AuthorizationDecision::Authorized { identity } => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        AuthorizationDecision::DenyUnauthenticated | AuthorizationDecision::DenyMalformed => {
            Redirect::to(&guard.deny_unauthenticated_target).into_response()
        }
        AuthorizationDecision::DenyForbidden { identity } => {
            tracing::warn!(
                section = %guard.section,
                role = %identity.role,
                "role not permitted in section"
            );
            Redirect::to(&guard.deny_forbidden_target).into_response()
        }
    }
}

/// Identity Extractor
///
/// Lets protected handlers take `identity: Identity` as an argument, the
/// same way the guard left it in request extensions. A handler mounted
/// without a guard has no identity to extract and rejects with 401.
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
