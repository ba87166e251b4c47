use std::env;

/// AppConfig
///
/// The application's immutable configuration, loaded once at startup and
/// shared across all requests via the unified state. The authorization
/// subsystem reads three paths from it: the two deny targets every section
/// guard redirects to, and the fallback landing page for roles the registry
/// does not know.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Runtime environment marker. Controls log formatting and whether the
    /// `x-auth-user` debug carrier is honored.
    pub env: Env,
    /// Where unauthenticated and malformed-credential requests are sent.
    pub login_path: String,
    /// Where authenticated-but-forbidden requests are sent.
    pub unauthorized_path: String,
    /// Landing page for any role without a registry row.
    pub fallback_landing: String,
}

/// Env
///
/// Runtime context: `Local` enables development conveniences (pretty logs,
/// the debug session header); `Production` disables all of them.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Safe, non-panicking values for test setup, mirroring the documented
    /// deny targets and fallback. Tests override individual fields as
    /// needed instead of going through environment variables.
    fn default() -> Self {
        Self {
            env: Env::Local,
            login_path: "/login".to_string(),
            unauthorized_path: "/unauthorized".to_string(),
            fallback_landing: "/dashboard".to_string(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical startup path: reads `APP_ENV` plus the optional path
    /// overrides and fail-fasts on anything unusable. A portal that cannot
    /// name its deny targets must not begin serving traffic.
    ///
    /// # Panics
    /// Panics if a configured path is empty or not absolute.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let login_path = path_var("LOGIN_PATH", "/login");
        let unauthorized_path = path_var("UNAUTHORIZED_PATH", "/unauthorized");
        let fallback_landing = path_var("FALLBACK_LANDING_PATH", "/dashboard");

        Self {
            env,
            login_path,
            unauthorized_path,
            fallback_landing,
        }
    }
}

/// Reads one path-valued variable with a default, enforcing that the result
/// is a non-empty absolute path.
fn path_var(name: &str, default: &str) -> String {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    if value.is_empty() || !value.starts_with('/') {
        panic!("FATAL: {} must be an absolute path, got '{}'", name, value);
    }
    value
}
