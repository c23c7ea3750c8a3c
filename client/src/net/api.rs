//! REST API helpers for the remote auth/profile service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an `ApiError`; nothing is retried. Callers
//! decide whether a failure means "stay on login" or "session is gone".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AccessToken, UserProfile};
#[cfg(any(test, feature = "hydrate"))]
use super::types::SignInResponse;
#[cfg(feature = "hydrate")]
use super::types::SignInRequest;

pub const SIGN_IN_PATH: &str = "/auth/signin-with-phone-and-password";
pub const PROFILE_PATH: &str = "/user/get-profile";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn token_from_response(body: SignInResponse) -> Result<AccessToken, ApiError> {
    AccessToken::new(body.access_token).ok_or_else(|| ApiError::Decode("empty accessToken".to_owned()))
}

/// Exchange a phone number and password for a bearer token via
/// `POST /auth/signin-with-phone-and-password`.
///
/// # Errors
///
/// Returns `ApiError::Status` for any non-success response, `Request` when
/// the request could not be sent, and `Decode` when the body lacks a token.
pub async fn sign_in(phone_number: &str, password: &str) -> Result<AccessToken, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(crate::config::api_base_url(), SIGN_IN_PATH);
        let payload = SignInRequest { phone_number, password };
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: SignInResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        token_from_response(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (phone_number, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user's profile via `GET /user/get-profile`.
///
/// A non-success status means the token is not (or no longer) accepted.
///
/// # Errors
///
/// Returns `ApiError::Status` for any non-success response, `Request` when
/// the request could not be sent, and `Decode` when the body is not a JSON
/// object.
pub async fn fetch_profile(token: &AccessToken) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(crate::config::api_base_url(), PROFILE_PATH);
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &token.bearer_header())
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<UserProfile>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}
