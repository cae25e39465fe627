//! Dashboard home, the landing route of the guarded area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only ever mounted inside `RouteGuard`, so a session is present when this
//! renders. Statistics panels are served by the analytics frontend bundle and
//! are not part of this crate; this page hosts identity and sign-out.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::CHANGE_PASSWORD_PATH;
use crate::state::auth::{Session, SessionContext};

pub(crate) fn greeting(session: Option<&Session>) -> String {
    session.map_or_else(|| "Welcome".to_owned(), |s| format!("Welcome, {}", s.name()))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    #[cfg(feature = "hydrate")]
    let (actions, navigate) =
        (crate::state::auth_actions::browser_auth_actions(), leptos_router::hooks::use_navigate());

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            actions.sign_out();
            navigate(crate::routes::SIGN_IN_PATH, crate::util::auth::replace_navigation());
        }
    };

    let title = move || greeting(session.current().as_ref());
    let email = move || session.current().map(|s| s.email().to_owned()).unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <div class="dashboard-header__identity">
                    <h1>{title}</h1>
                    <span class="dashboard-header__email">{email}</span>
                </div>
                <nav class="dashboard-header__actions">
                    <A href=CHANGE_PASSWORD_PATH>"Change password"</A>
                    <button class="dashboard-button" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </nav>
            </header>
            <main class="dashboard-body">
                <p class="dashboard-body__hint">"Select a report from the navigation to get started."</p>
            </main>
        </div>
    }
}
