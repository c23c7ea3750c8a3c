//! Compile-time client configuration.
//!
//! The API base URL can be overridden with `PORTAL_API_BASE_URL` when the WASM
//! bundle is built; everything else is fixed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Remote API used when no build-time override is present.
pub const DEFAULT_API_BASE_URL: &str = "https://dev.api.infigon.app";

/// `localStorage` key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Shown in place of profile fields the server reports as absent.
pub const PROFILE_PLACEHOLDER: &str = "N/A";

/// Base URL of the remote auth/profile API, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("PORTAL_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}
