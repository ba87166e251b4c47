use std::collections::HashSet;

use crate::{
    models::{Identity, Role},
    session::{self, DecodeError},
};

/// AllowList
///
/// The set of roles permitted into one section. Built once at route
/// registration, immutable afterwards; membership is an exact string match
/// on the role token, so ordering and duplicates are irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList(HashSet<Role>);

impl AllowList {
    pub fn new<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        Self(roles.into_iter().collect())
    }

    pub fn permits(&self, role: &Role) -> bool {
        self.0.contains(role)
    }

    /// An empty allow-list is legal and denies every authenticated caller.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Role> for AllowList {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// AuthorizationDecision
///
/// The tagged outcome of one gate evaluation. Exactly one variant is
/// produced per call and it is the sole basis for the continue/redirect
/// choice downstream; there are no partial or retriable states.
///
/// `DenyForbidden` is a normal, expected outcome (a signed-in employee
/// browsing to /admin), not an error. The denied identity is carried so the
/// guard can log the section/role pair.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorizationDecision {
    /// The credential decoded and its role is in the section's allow-list.
    Authorized { identity: Identity },
    /// No credential was presented.
    DenyUnauthenticated,
    /// A credential was presented but did not decode (bad JSON, bad shape).
    DenyMalformed,
    /// The credential decoded but the role is outside the allow-list.
    DenyForbidden { identity: Identity },
}

impl AuthorizationDecision {
    pub fn is_authorized(&self) -> bool {
        matches!(self, AuthorizationDecision::Authorized { .. })
    }
}

/// authorize
///
/// The single authorization gate every section guard calls. Evaluation is
/// total: every input, including adversarial cookie content, maps to a
/// defined variant and nothing escapes as a panic. It is also idempotent
/// and side-effect-free; the same input always yields the same variant,
/// and no attempt counting or caching happens at this layer.
///
/// `DecodeError::Missing` maps to `DenyUnauthenticated`; the other decode
/// failures map to `DenyMalformed`. Sections that want to treat the two
/// identically do so in their guard's response mapping, never by blurring
/// the variants here.
pub fn authorize(raw_cookie: Option<&str>, allow: &AllowList) -> AuthorizationDecision {
    let identity = match session::decode(raw_cookie) {
        Ok(identity) => identity,
        Err(DecodeError::Missing) => return AuthorizationDecision::DenyUnauthenticated,
        Err(DecodeError::Malformed) | Err(DecodeError::InvalidShape) => {
            return AuthorizationDecision::DenyMalformed;
        }
    };

    if allow.permits(&identity.role) {
        AuthorizationDecision::Authorized { identity }
    } else {
        AuthorizationDecision::DenyForbidden { identity }
    }
}
