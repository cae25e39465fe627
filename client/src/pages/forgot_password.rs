//! Password reset request page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::SIGN_IN_PATH;
use crate::state::auth_actions::validate_email;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let actions = crate::state::auth_actions::browser_auth_actions();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        if let Err(e) = validate_email(&email_value) {
            info.set(e.user_message());
            return;
        }
        busy.set(true);
        info.set("Sending reset link...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let actions = actions.clone();
            leptos::task::spawn_local(async move {
                let message = match actions.request_password_reset(&email_value).await {
                    Ok(message) => message,
                    Err(e) => e.user_message(),
                };
                info.set(message);
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="auth-card">
            <h1>"Reset password"</h1>
            <p class="auth-card__subtitle">"We will email you a reset link."</p>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Send Reset Link"
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
