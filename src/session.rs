use axum::http::{HeaderMap, header};
use serde_json::Value;
use thiserror::Error;

use crate::models::Identity;

/// Name of the session cookie set by the external sign-in service.
pub const SESSION_COOKIE: &str = "auth_user";

/// DecodeError
///
/// The full failure taxonomy of session decoding. Every variant is recovered
/// locally by the authorization gate into a deny decision; none of them ever
/// crosses a handler boundary as a panic or a 500.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// No credential was presented at all.
    #[error("session cookie absent")]
    Missing,

    /// A credential was presented but is not well-formed serialized data.
    #[error("session cookie is not valid JSON")]
    Malformed,

    /// The payload parsed, but is not an object carrying a string `role`.
    #[error("session payload does not carry a usable role")]
    InvalidShape,
}

/// cookie_value
///
/// Pulls the raw `auth_user` value out of the request's `Cookie` header.
/// Pairs that do not split into `name=value` are skipped rather than treated
/// as an error; the first matching pair wins. Returns `None` when the header
/// is absent, not valid ASCII, or carries no `auth_user` pair; the decoder
/// maps all of those to `DecodeError::Missing`.
pub fn cookie_value(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// decode
///
/// Parses a raw credential value into an `Identity`. Total over all inputs,
/// adversarial ones included: every possible value maps to `Ok` or to one of
/// the three `DecodeError` variants. Pure: no I/O, and nothing from the
/// credential is logged here.
///
/// The payload is parsed, not verified: integrity/signature checks belong to
/// the session-issuance service that sets the cookie, which is outside this
/// subsystem. On success every field other than `role` is passed through
/// verbatim on `Identity::claims`.
pub fn decode(raw: Option<&str>) -> Result<Identity, DecodeError> {
    let raw = raw.ok_or(DecodeError::Missing)?;

    // Two-phase parse: a syntax error is Malformed, a type/shape error on
    // otherwise valid JSON is InvalidShape.
    let value: Value = serde_json::from_str(raw).map_err(|_| DecodeError::Malformed)?;

    match &value {
        Value::Object(fields) => match fields.get("role") {
            Some(Value::String(_)) => {}
            _ => return Err(DecodeError::InvalidShape),
        },
        _ => return Err(DecodeError::InvalidShape),
    }

    serde_json::from_value(value).map_err(|_| DecodeError::InvalidShape)
}
