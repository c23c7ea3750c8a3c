//! Home page: re-validates the stored token and shows the user's profile.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::profile_fields::ProfileFields;
use crate::net::types::UserProfile;
use crate::state::auth::AuthState;
use crate::state::session::{self, SessionStore, TokenStorage};
use crate::util::auth::install_unauth_redirect;

/// Load the profile with the stored token, ending the session on failure.
///
/// A missing token never reaches the network.
async fn load_profile<S: TokenStorage>(store: SessionStore<S>, auth: RwSignal<AuthState>) -> Option<UserProfile> {
    let Some(token) = store.load() else {
        auth.update(AuthState::sign_out);
        return None;
    };
    auth.update(AuthState::begin_check);
    let result = crate::net::api::fetch_profile(&token).await;
    match session::resolve_profile(&store, result) {
        Ok(profile) => {
            auth.update(AuthState::sign_in);
            Some(profile)
        }
        Err(_) => {
            auth.update(AuthState::sign_out);
            None
        }
    }
}

/// Home page. Redirects to login whenever the session is logged out.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let profile = LocalResource::new(move || load_profile(SessionStore::browser(), auth));

    let on_logout = move |_| {
        let route = session::logout(&SessionStore::browser());
        auth.update(AuthState::sign_out);
        navigate(route.path(), NavigateOptions::default());
    };

    view! {
        <Suspense fallback=move || view! { <div class="page page--loading">"Loading..."</div> }>
            {move || {
                profile
                    .get()
                    .map(|loaded| match loaded {
                        Some(p) => {
                            let greeting = p.greeting();
                            view! {
                                <div class="page">
                                    <div class="card card--wide">
                                        <button class="btn btn--danger card__corner" on:click=on_logout.clone()>
                                            "Logout"
                                        </button>
                                        <h2 class="card__title">{greeting}</h2>
                                        <ProfileFields profile=p/>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        None => view! { <div class="page page--loading">"Redirecting..."</div> }.into_any(),
                    })
            }}
        </Suspense>
    }
}
