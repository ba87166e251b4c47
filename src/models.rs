use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Identity & Role (decoded session payload) ---

/// Role
///
/// Role identifier carried in the session payload. Roles are opaque string
/// tokens compared by exact equality; an identifier outside the known
/// vocabularies is never implicitly granted anything, it simply fails every
/// allow-list and falls back in the landing-path registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    // Workforce vocabulary (dashboard sections).
    pub const SUPER_ADMIN: Role = Role(Cow::Borrowed("super_admin"));
    pub const AGENCY_ADMIN: Role = Role(Cow::Borrowed("agency_admin"));
    pub const AGENT: Role = Role(Cow::Borrowed("agent"));
    pub const EMPLOYER_ADMIN: Role = Role(Cow::Borrowed("employer_admin"));
    pub const MANAGER: Role = Role(Cow::Borrowed("manager"));
    pub const CONTACT: Role = Role(Cow::Borrowed("contact"));
    pub const EMPLOYEE: Role = Role(Cow::Borrowed("employee"));
    pub const SYSTEM: Role = Role(Cow::Borrowed("system"));

    // Recruiting vocabulary. Disjoint from the workforce set and kept in its
    // own registry (see `registry.rs`).
    pub const CANDIDATE: Role = Role(Cow::Borrowed("candidate"));
    pub const RECRUITER: Role = Role(Cow::Borrowed("recruiter"));
    pub const RECRUITER_ADMIN: Role = Role(Cow::Borrowed("recruiter_admin"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity
///
/// The decoded session payload: the caller's role plus every other claim
/// passed through verbatim. Only `session::decode` constructs one, so an
/// `Identity` in hand always came from a syntactically valid payload with a
/// string `role` field. Created per request, consumed by the gate, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// The RBAC field checked against each section's allow-list.
    pub role: Role,
    /// Remaining claims (user id, tenant id, display name, ...). The gate
    /// does not interpret these; they are carried for the content layer.
    #[serde(flatten)]
    pub claims: Map<String, Value>,
}

impl Identity {
    /// Typed view of the conventional `user_id` claim. Returns `None` when
    /// the claim is absent or not a UUID string; the gate never requires it.
    pub fn user_id(&self) -> Option<Uuid> {
        self.claim_uuid("user_id")
    }

    /// Typed view of the conventional `tenant_id` claim.
    pub fn tenant_id(&self) -> Option<Uuid> {
        self.claim_uuid("tenant_id")
    }

    fn claim_uuid(&self, key: &str) -> Option<Uuid> {
        self.claims
            .get(key)
            .and_then(Value::as_str)
            .and_then(|raw| Uuid::parse_str(raw).ok())
    }
}

// --- Response DTOs (frontend-facing) ---

/// SectionContext
///
/// The payload every protected section handler returns to the dashboard
/// frontend: which section answered, as whom, and when it was rendered.
/// Real widgets hang off this client-side; the backend stays presentational
/// glue around the guard.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SectionContext {
    /// Section identifier, e.g. "admin" or "employer/staff".
    pub section: String,
    /// The caller's role as resolved by the section guard.
    pub role: String,
    /// Passthrough user id claim, when present and well-formed.
    pub user_id: Option<Uuid>,
    /// Passthrough tenant id claim, when present and well-formed.
    pub tenant_id: Option<Uuid>,
    #[ts(type = "string")]
    pub rendered_at: DateTime<Utc>,
}

impl SectionContext {
    pub fn render(section: &str, identity: &Identity) -> Self {
        Self {
            section: section.to_string(),
            role: identity.role.as_str().to_string(),
            user_id: identity.user_id(),
            tenant_id: identity.tenant_id(),
            rendered_at: Utc::now(),
        }
    }
}

/// PortalNotice
///
/// Minimal body for the public navigation endpoints (login, unauthorized,
/// fallback dashboard). Deny outcomes land here; the message is static and
/// never echoes anything from the rejected request.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct PortalNotice {
    pub page: String,
    pub message: String,
}

impl PortalNotice {
    pub fn new(page: &str, message: &str) -> Self {
        Self {
            page: page.to_string(),
            message: message.to_string(),
        }
    }
}
