//! Sign-in page: email + password against the analytics backend.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{CHANGE_PASSWORD_PATH, FORGOT_PASSWORD_PATH};
use crate::state::auth_actions::validate_sign_in_input;

/// Banner text for a sign-in that is about to start.
const SIGNING_IN_MESSAGE: &str = "Signing in...";

#[component]
pub fn SignInPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let (actions, navigate) =
        (crate::state::auth_actions::browser_auth_actions(), leptos_router::hooks::use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if let Err(e) = validate_sign_in_input(&email_value, &password_value) {
            info.set(e.user_message());
            return;
        }
        busy.set(true);
        info.set(SIGNING_IN_MESSAGE.to_owned());

        #[cfg(feature = "hydrate")]
        {
            let actions = actions.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match actions.sign_in(&email_value, &password_value).await {
                    Ok(_) => {
                        password.set(String::new());
                        info.set(String::new());
                        navigate(crate::routes::DASHBOARD_HOME_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::debug!("sign-in failed: {e}");
                        // Resubmitting the same password cannot help.
                        if !e.is_retryable() {
                            password.set(String::new());
                        }
                        info.set(e.user_message());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="auth-card">
            <h1>"Racing Analytics"</h1>
            <p class="auth-card__subtitle">"Sign in to your dashboard"</p>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="email"
                    autocomplete="username"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    autocomplete="current-password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign In"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
            <div class="auth-links">
                <A href=FORGOT_PASSWORD_PATH>"Forgot password?"</A>
                <A href=CHANGE_PASSWORD_PATH>"Change password"</A>
            </div>
        </div>
    }
}
