//! Generic key/value listing of a user profile.

use leptos::prelude::*;

use crate::net::types::UserProfile;

/// Renders every profile field in server order, with the placeholder for
/// absent values.
#[component]
pub fn ProfileFields(profile: UserProfile) -> impl IntoView {
    view! {
        <div class="profile-fields">
            {profile
                .fields()
                .iter()
                .map(|field| {
                    view! {
                        <div class="profile-field">
                            <p class="profile-field__label">{field.key.clone()}</p>
                            <p class="profile-field__value">{field.display_value().to_owned()}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
