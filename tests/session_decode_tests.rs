use axum::http::{HeaderMap, HeaderValue, header};
use serde_json::json;
use uuid::Uuid;
use workforce_portal::{
    models::Role,
    session::{self, DecodeError},
};

// --- decode(): failure taxonomy ---

#[test]
fn test_decode_missing_cookie() {
    assert_eq!(session::decode(None), Err(DecodeError::Missing));
}

#[test]
fn test_decode_rejects_non_json() {
    assert_eq!(session::decode(Some("not-json")), Err(DecodeError::Malformed));
    assert_eq!(
        session::decode(Some(r#"{"role": "emplo"#)),
        Err(DecodeError::Malformed)
    );
    assert_eq!(session::decode(Some("")), Err(DecodeError::Malformed));
}

#[test]
fn test_decode_rejects_wrong_shape() {
    // Valid JSON, but not an object carrying a string role.
    assert_eq!(session::decode(Some("[1,2]")), Err(DecodeError::InvalidShape));
    assert_eq!(
        session::decode(Some(r#""employee""#)),
        Err(DecodeError::InvalidShape)
    );
    assert_eq!(session::decode(Some("{}")), Err(DecodeError::InvalidShape));
    assert_eq!(
        session::decode(Some(r#"{"role": 42}"#)),
        Err(DecodeError::InvalidShape)
    );
    assert_eq!(
        session::decode(Some(r#"{"role": null}"#)),
        Err(DecodeError::InvalidShape)
    );
}

// --- decode(): success & passthrough ---

#[test]
fn test_decode_minimal_payload() {
    let identity = session::decode(Some(r#"{"role":"employee"}"#)).expect("should decode");
    assert_eq!(identity.role, Role::EMPLOYEE);
    assert!(identity.claims.is_empty());
}

#[test]
fn test_decode_passes_claims_through_verbatim() {
    let user_id = Uuid::new_v4();
    let tenant_id = Uuid::new_v4();
    let payload = json!({
        "role": "contact",
        "user_id": user_id.to_string(),
        "tenant_id": tenant_id.to_string(),
        "display_name": "Pat",
        "seniority": 7
    })
    .to_string();

    let identity = session::decode(Some(payload.as_str())).expect("should decode");

    assert_eq!(identity.role, Role::CONTACT);
    // Claims the gate does not understand survive untouched.
    assert_eq!(identity.claims["display_name"], json!("Pat"));
    assert_eq!(identity.claims["seniority"], json!(7));
    // Typed accessors for the conventional ids.
    assert_eq!(identity.user_id(), Some(user_id));
    assert_eq!(identity.tenant_id(), Some(tenant_id));
}

#[test]
fn test_claim_accessors_tolerate_bad_values() {
    let identity =
        session::decode(Some(r#"{"role":"employee","user_id":"not-a-uuid","tenant_id":7}"#))
            .expect("should decode");
    // The accessors are conveniences, not validation: a malformed id claim
    // reads as absent rather than failing the decode.
    assert_eq!(identity.user_id(), None);
    assert_eq!(identity.tenant_id(), None);
}

#[test]
fn test_unknown_role_token_still_decodes() {
    // Decoding and authorization are separate concerns: an unheard-of role
    // decodes fine and is denied later by every allow-list.
    let identity = session::decode(Some(r#"{"role":"unknown_role"}"#)).expect("should decode");
    assert_eq!(identity.role, Role::new("unknown_role"));
}

// --- cookie_value(): header extraction ---

fn headers_with_cookie(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn test_cookie_value_absent_header() {
    assert_eq!(session::cookie_value(&HeaderMap::new()), None);
}

#[test]
fn test_cookie_value_other_cookies_only() {
    let headers = headers_with_cookie("theme=dark; lang=en");
    assert_eq!(session::cookie_value(&headers), None);
}

#[test]
fn test_cookie_value_extracts_among_others() {
    let headers = headers_with_cookie(r#"theme=dark; auth_user={"role":"agent"}; lang=en"#);
    assert_eq!(
        session::cookie_value(&headers).as_deref(),
        Some(r#"{"role":"agent"}"#)
    );
}

#[test]
fn test_cookie_value_skips_malformed_pairs() {
    // A pair without '=' is skipped, not a parse failure for the header.
    let headers = headers_with_cookie(r#"garbage; auth_user={"role":"agent"}"#);
    assert!(session::cookie_value(&headers).is_some());
}

#[test]
fn test_cookie_value_first_match_wins() {
    let headers = headers_with_cookie(r#"auth_user={"role":"agent"}; auth_user={"role":"super_admin"}"#);
    assert_eq!(
        session::cookie_value(&headers).as_deref(),
        Some(r#"{"role":"agent"}"#)
    );
}
