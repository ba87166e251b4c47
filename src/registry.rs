use std::collections::HashMap;

use thiserror::Error;

use crate::models::{Identity, Role};

/// RegistryError
///
/// Construction-time validation failures. These are the one fatal condition
/// in the subsystem: a registry that cannot be built must stop the process
/// at startup (`main` unwraps with a FATAL message) rather than surface per
/// request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("fallback landing path is empty")]
    EmptyFallback,

    #[error("landing path '{0}' is not absolute")]
    RelativePath(String),
}

/// RoleRegistry
///
/// Static role-to-landing-path table with a configured fallback. One registry
/// is the single source of truth for both default-landing lookups and the
/// root-entry resolver; per-section access is expressed separately through
/// each guard's allow-list. Built once in `main`, shared read-only via
/// `Arc`, never mutated at request time.
///
/// The workforce and recruiting vocabularies live in two *named* registries
/// rather than one merged table. The vocabularies belong to different
/// product areas and a merged table would widen what a single cookie can
/// reach.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    landing: HashMap<Role, String>,
    fallback: String,
}

impl RoleRegistry {
    /// new
    ///
    /// Builds a registry from `(role, landing path)` entries plus the
    /// fallback used for any role not in the table. Every path, fallback
    /// included, must be non-empty and absolute; anything else is a
    /// configuration error, reported here and fatal at startup.
    pub fn new<I, P>(entries: I, fallback: impl Into<String>) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (Role, P)>,
        P: Into<String>,
    {
        let fallback = fallback.into();
        if fallback.is_empty() {
            return Err(RegistryError::EmptyFallback);
        }
        if !fallback.starts_with('/') {
            return Err(RegistryError::RelativePath(fallback));
        }

        let mut landing = HashMap::new();
        for (role, path) in entries {
            let path = path.into();
            if !path.starts_with('/') {
                return Err(RegistryError::RelativePath(path));
            }
            landing.insert(role, path);
        }

        Ok(Self { landing, fallback })
    }

    /// workforce
    ///
    /// The dashboard vocabulary and its landing table. `manager` is part of
    /// the employer section's allow-list but deliberately has no row here;
    /// managers land on the fallback page.
    pub fn workforce(fallback: impl Into<String>) -> Result<Self, RegistryError> {
        Self::new(
            [
                (Role::SUPER_ADMIN, "/admin"),
                (Role::AGENCY_ADMIN, "/agency"),
                (Role::AGENT, "/agency"),
                (Role::EMPLOYER_ADMIN, "/employer"),
                (Role::CONTACT, "/employer"),
                (Role::EMPLOYEE, "/employee"),
                (Role::SYSTEM, "/system"),
            ],
            fallback,
        )
    }

    /// recruiting
    ///
    /// The recruiting feature area's own table. Workforce roles resolved
    /// against this registry hit the fallback, and vice versa; the two
    /// vocabularies never cross.
    pub fn recruiting(fallback: impl Into<String>) -> Result<Self, RegistryError> {
        Self::new(
            [
                (Role::CANDIDATE, "/recruiting/candidate"),
                (Role::RECRUITER, "/recruiting/console"),
                (Role::RECRUITER_ADMIN, "/recruiting/console"),
            ],
            fallback,
        )
    }

    /// landing_path_for
    ///
    /// The documented landing path for a role, or the configured fallback
    /// for any role not in the table. Never panics on unknown input.
    pub fn landing_path_for(&self, role: &Role) -> &str {
        self.landing
            .get(role)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// resolve_home
    ///
    /// Redirect resolution for an authenticated caller hitting an entry
    /// point with no specific target: where does this identity live?
    /// Delegates to `landing_path_for`, so entry routing and the landing
    /// table cannot drift apart. Section guards never call this; on denial
    /// they use their fixed deny targets instead.
    pub fn resolve_home(&self, identity: &Identity) -> &str {
        self.landing_path_for(&identity.role)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
