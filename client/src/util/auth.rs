//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::AppRoute;
use crate::state::auth::AuthState;

/// Whether a protected page should send the user to login.
///
/// `Checking` does not redirect: the token may still be accepted.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_authenticated() && !state.is_checking()
}

/// Redirect to the login route whenever the session is known to be logged out.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(AppRoute::Login.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
