//! Sign-in screen shown while no session identity is present.
//!
//! Credential handling is delegated entirely to the backend provider's
//! hosted flow; this screen only links to it.

use leptos::prelude::*;

/// Login screen with a provider-hosted sign-in link.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"SecureHub"</h1>
            <p>"Security scanning dashboard"</p>
            <a href="/auth/v1/sign-in" class="btn btn--primary login-page__button">
                "Sign In"
            </a>
        </div>
    }
}
