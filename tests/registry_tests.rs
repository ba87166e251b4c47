use workforce_portal::{
    RoleRegistry,
    models::Role,
    registry::RegistryError,
    session,
};

const FALLBACK: &str = "/dashboard";

fn workforce() -> RoleRegistry {
    RoleRegistry::workforce(FALLBACK).expect("workforce registry should build")
}

// --- The documented landing table ---

#[test]
fn test_workforce_landing_table_is_exact() {
    let registry = workforce();
    let expected = [
        (Role::SUPER_ADMIN, "/admin"),
        (Role::AGENCY_ADMIN, "/agency"),
        (Role::AGENT, "/agency"),
        (Role::EMPLOYER_ADMIN, "/employer"),
        (Role::CONTACT, "/employer"),
        (Role::EMPLOYEE, "/employee"),
        (Role::SYSTEM, "/system"),
    ];

    for (role, path) in expected {
        assert_eq!(
            registry.landing_path_for(&role),
            path,
            "landing path for '{}'",
            role
        );
    }
}

#[test]
fn test_unrecognized_role_gets_fallback() {
    let registry = workforce();
    assert_eq!(registry.landing_path_for(&Role::new("unknown_role")), FALLBACK);
    assert_eq!(registry.fallback(), FALLBACK);
}

#[test]
fn test_manager_has_no_landing_row() {
    // manager sits in the employer section's allow-list but deliberately has
    // no landing entry; managers land on the fallback page.
    let registry = workforce();
    assert_eq!(registry.landing_path_for(&Role::MANAGER), FALLBACK);
}

#[test]
fn test_fallback_is_configurable() {
    let registry = RoleRegistry::workforce("/login").expect("should build");
    assert_eq!(registry.landing_path_for(&Role::new("unknown_role")), "/login");
}

// --- Redirect Resolver ---

#[test]
fn test_resolve_home_for_contact() {
    let registry = workforce();
    let identity = session::decode(Some(r#"{"role":"contact"}"#)).unwrap();
    assert_eq!(registry.resolve_home(&identity), "/employer");
}

#[test]
fn test_resolve_home_for_unknown_role() {
    let registry = workforce();
    let identity = session::decode(Some(r#"{"role":"unknown_role"}"#)).unwrap();
    assert_eq!(registry.resolve_home(&identity), FALLBACK);
}

#[test]
fn test_resolve_home_matches_landing_table_for_all_roles() {
    // Entry routing and the landing table share one source of truth; the
    // resolver can never answer differently than the table.
    let registry = workforce();
    for role in [
        Role::SUPER_ADMIN,
        Role::AGENCY_ADMIN,
        Role::AGENT,
        Role::EMPLOYER_ADMIN,
        Role::MANAGER,
        Role::CONTACT,
        Role::EMPLOYEE,
        Role::SYSTEM,
    ] {
        let payload = format!(r#"{{"role":"{}"}}"#, role);
        let identity = session::decode(Some(payload.as_str())).unwrap();
        assert_eq!(registry.resolve_home(&identity), registry.landing_path_for(&role));
    }
}

// --- The two vocabularies stay apart ---

#[test]
fn test_recruiting_registry_table() {
    let registry = RoleRegistry::recruiting(FALLBACK).expect("recruiting registry should build");
    assert_eq!(
        registry.landing_path_for(&Role::CANDIDATE),
        "/recruiting/candidate"
    );
    assert_eq!(
        registry.landing_path_for(&Role::RECRUITER),
        "/recruiting/console"
    );
    assert_eq!(
        registry.landing_path_for(&Role::RECRUITER_ADMIN),
        "/recruiting/console"
    );
}

#[test]
fn test_vocabularies_do_not_cross_registries() {
    let workforce = workforce();
    let recruiting = RoleRegistry::recruiting(FALLBACK).unwrap();

    // A recruiting role means nothing to the workforce registry...
    assert_eq!(workforce.landing_path_for(&Role::RECRUITER), FALLBACK);
    assert_eq!(workforce.landing_path_for(&Role::CANDIDATE), FALLBACK);
    // ...and a workforce role means nothing to the recruiting registry.
    assert_eq!(recruiting.landing_path_for(&Role::SUPER_ADMIN), FALLBACK);
    assert_eq!(recruiting.landing_path_for(&Role::EMPLOYEE), FALLBACK);
}

// --- Construction-time validation (fail-fast configuration) ---

#[test]
fn test_empty_fallback_is_rejected() {
    let result = RoleRegistry::new([(Role::EMPLOYEE, "/employee")], "");
    assert_eq!(result.unwrap_err(), RegistryError::EmptyFallback);
}

#[test]
fn test_relative_fallback_is_rejected() {
    let result = RoleRegistry::new([(Role::EMPLOYEE, "/employee")], "dashboard");
    assert_eq!(
        result.unwrap_err(),
        RegistryError::RelativePath("dashboard".to_string())
    );
}

#[test]
fn test_relative_landing_entry_is_rejected() {
    let result = RoleRegistry::new([(Role::EMPLOYEE, "employee")], FALLBACK);
    assert_eq!(
        result.unwrap_err(),
        RegistryError::RelativePath("employee".to_string())
    );
}
