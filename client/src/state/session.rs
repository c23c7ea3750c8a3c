//! Persisted session token and the transitions that change it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand API results to the functions here; they persist or clear the
//! token and return the route the page should navigate to. Keeping storage
//! behind `TokenStorage` lets the flows run without a browser.
//!
//! INVARIANTS
//! ==========
//! - At most one token is stored, under `ACCESS_TOKEN_KEY`.
//! - A failed sign-in never writes to storage.
//! - A rejected profile fetch clears exactly what `logout` clears.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::app::AppRoute;
use crate::config::ACCESS_TOKEN_KEY;
use crate::net::error::ApiError;
use crate::net::types::{AccessToken, UserProfile};
use crate::util::storage::BrowserStorage;

/// Failure to persist a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Minimal key-value storage backing the session.
pub trait TokenStorage {
    /// Read `key`. Unavailable storage reads as absent.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the value could not be persisted.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the key could not be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Owner of the single persisted bearer token.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: TokenStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns the underlying `StorageError` when the write fails.
    pub fn save(&self, token: &AccessToken) -> Result<(), StorageError> {
        self.storage.write(ACCESS_TOKEN_KEY, token.as_str())
    }

    /// The stored token, if any.
    pub fn load(&self) -> Option<AccessToken> {
        self.storage.read(ACCESS_TOKEN_KEY).and_then(AccessToken::new)
    }

    /// Remove the stored token. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns the underlying `StorageError` when the token is still stored.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(ACCESS_TOKEN_KEY)
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Why a sign-in attempt left the user on the login page.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("sign-in failed: {0}")]
    Api(#[from] ApiError),
    #[error("could not store session: {0}")]
    Storage(#[from] StorageError),
}

impl SignInError {
    /// Short message for the login form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Api(e) => e.sign_in_message(),
            Self::Storage(_) => "Could not save your session in this browser.",
        }
    }
}

/// Apply the result of a sign-in call.
///
/// On success the token is stored and the home route returned.
///
/// # Errors
///
/// Returns `SignInError::Api` when the call failed and `SignInError::Storage`
/// when the token could not be persisted. Nothing is stored in either case.
pub fn complete_sign_in<S: TokenStorage>(
    store: &SessionStore<S>,
    result: Result<AccessToken, ApiError>,
) -> Result<AppRoute, SignInError> {
    let token = result.inspect_err(|e| log::warn!("login failed: {e}"))?;
    store
        .save(&token)
        .inspect_err(|e| log::warn!("login succeeded but token was not stored: {e}"))?;
    log::info!("signed in");
    Ok(AppRoute::Home)
}

/// Apply the result of a profile fetch made with the stored token.
///
/// # Errors
///
/// On any failure the session is cleared as if by `logout` and the login
/// route is returned as the error.
pub fn resolve_profile<S: TokenStorage>(
    store: &SessionStore<S>,
    result: Result<UserProfile, ApiError>,
) -> Result<UserProfile, AppRoute> {
    result.map_err(|e| {
        log::warn!("profile check failed, ending session: {e}");
        logout(store)
    })
}

/// Clear the session. Safe to call when already logged out.
pub fn logout<S: TokenStorage>(store: &SessionStore<S>) -> AppRoute {
    match store.clear() {
        Ok(()) => log::info!("logged out"),
        Err(e) => log::warn!("logged out but token was not removed: {e}"),
    }
    AppRoute::Login
}
