//! Change-password page.
//!
//! Field checks run through the same validation the auth action applies, so a
//! mismatch is reported instantly in every build without a request.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::SIGN_IN_PATH;
use crate::state::auth_actions::{ChangePasswordForm, validate_change_password};

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_new_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let actions = crate::state::auth_actions::browser_auth_actions();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = ChangePasswordForm {
            email: email.get(),
            old_password: old_password.get(),
            new_password: new_password.get(),
            confirm_new_password: confirm_new_password.get(),
        };
        if let Err(e) = validate_change_password(&form) {
            info.set(e.user_message());
            return;
        }
        busy.set(true);
        info.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let actions = actions.clone();
            leptos::task::spawn_local(async move {
                match actions.change_password(&form).await {
                    Ok(message) => {
                        old_password.set(String::new());
                        new_password.set(String::new());
                        confirm_new_password.set(String::new());
                        info.set(message);
                    }
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    };

    let password_input = move |signal: RwSignal<String>, placeholder: &'static str, autocomplete: &'static str| {
        view! {
            <input
                class="auth-input"
                type="password"
                autocomplete=autocomplete
                placeholder=placeholder
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-card">
            <h1>"Change password"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="email"
                    autocomplete="username"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                {password_input(old_password, "Current password", "current-password")}
                {password_input(new_password, "New password", "new-password")}
                {password_input(confirm_new_password, "Confirm new password", "new-password")}
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Change Password"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
            <div class="auth-links">
                <A href=SIGN_IN_PATH>"Back to sign in"</A>
            </div>
        </div>
    }
}
