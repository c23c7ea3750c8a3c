//! Login page: phone number + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let phone_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let phone_value = phone_number.get();
        let password_value = password.get();
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::state::session::{SessionStore, complete_sign_in};

                let result = crate::net::api::sign_in(&phone_value, &password_value).await;
                match complete_sign_in(&SessionStore::browser(), result) {
                    Ok(route) => {
                        auth.update(AuthState::sign_in);
                        navigate(route.path(), NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(e.user_message().to_owned());
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (phone_value, password_value, auth);
        }
    };

    view! {
        <div class="page">
            <div class="card">
                <h2 class="card__title">"Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <div class="field">
                        <label class="field__label" for="phoneNumber">"Phone Number"</label>
                        <input
                            class="field__input"
                            type="text"
                            id="phoneNumber"
                            name="phoneNumber"
                            autocomplete="tel"
                            prop:value=move || phone_number.get()
                            on:input=move |ev| phone_number.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label class="field__label" for="password">"Password"</label>
                        <input
                            class="field__input"
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" role="alert">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
