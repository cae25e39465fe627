//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::config::ClientConfig;
use crate::pages::{
    change_password::ChangePasswordPage, dashboard::DashboardPage, forgot_password::ForgotPasswordPage,
    login::SignInPage,
};
use crate::routes::{
    AUTH_SEGMENT, CHANGE_PASSWORD_SEGMENT, DASHBOARD_HOME_PATH, DASHBOARD_SEGMENT, FORGOT_PASSWORD_SEGMENT,
    SIGN_IN_PATH, SIGN_IN_SEGMENT,
};
use crate::state::auth::SessionContext;
use crate::state::session_store::SessionStore;
use crate::util::auth::replace_navigation;
use crate::util::storage::browser_storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session context and store for the tab and provides them, with the
/// client config, to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = SessionStore::new(browser_storage());
    let session = SessionContext::new();

    provide_context(config);
    provide_context(store.clone());
    provide_context(session);

    // Effects only run in the browser, after mount.
    Effect::new(move || session.hydrate(&store));

    view! {
        <Stylesheet id="leptos" href="/pkg/racing-dashboard.css"/>
        <Title text="Racing Analytics"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=SIGN_IN_PATH options=replace_navigation()/> }>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Redirect path=DASHBOARD_HOME_PATH options=replace_navigation()/> }
                />
                <ParentRoute path=StaticSegment(AUTH_SEGMENT) view=AuthLayout>
                    <Route path=StaticSegment(SIGN_IN_SEGMENT) view=SignInPage/>
                    <Route path=StaticSegment(FORGOT_PASSWORD_SEGMENT) view=ForgotPasswordPage/>
                    <Route path=StaticSegment(CHANGE_PASSWORD_SEGMENT) view=ChangePasswordPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment(DASHBOARD_SEGMENT) view=ProtectedLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn AuthLayout() -> impl IntoView {
    view! {
        <main class="auth-layout">
            <Outlet/>
        </main>
    }
}

/// The whole `/dashboard` subtree sits behind one guard.
#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RouteGuard>
            <Outlet/>
        </RouteGuard>
    }
}
