//! Session gate for the protected subtree.
//!
//! Renders a neutral loading indicator while `Pending`, the children once
//! `Authorized`, and nothing while the `Unauthorized` redirect is in flight.
//! Verification only runs in the browser; server renders stay `Pending`, which
//! keeps SSR output and the first hydrated frame identical.

// HTML rendering of type-erased views needs the `ssr` build.
#[cfg(all(test, feature = "ssr"))]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{GuardDecision, install_unauth_redirect};

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let decision = RwSignal::new(GuardDecision::Pending);
    install_unauth_redirect(decision, use_navigate());

    #[cfg(feature = "hydrate")]
    {
        use crate::config::ClientConfig;
        use crate::state::auth::SessionContext;
        use crate::state::session_store::SessionStore;
        use crate::util::auth::verify_session;
        use crate::util::timer::{BrowserTimer, Timer};

        let session = expect_context::<SessionContext>();
        let store = expect_context::<SessionStore>();
        let settle_timeout = expect_context::<ClientConfig>().guard_settle_timeout;
        leptos::task::spawn_local(async move {
            let outcome = verify_session(session, &store, BrowserTimer.sleep(settle_timeout)).await;
            log::debug!("route guard resolved {outcome:?}");
            let _ = decision.try_set(outcome);
        });
    }

    view! { <GuardedContent decision>{children()}</GuardedContent> }
}

/// What the guard shows for each decision; children only once `Authorized`.
#[component]
pub fn GuardedContent(decision: RwSignal<GuardDecision>, children: ChildrenFn) -> impl IntoView {
    move || match decision.get() {
        GuardDecision::Pending => view! { <LoadingIndicator/> }.into_any(),
        GuardDecision::Authorized => children().into_any(),
        GuardDecision::Unauthorized => ().into_any(),
    }
}

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator" role="status" aria-live="polite">
            <span class="loading-indicator__spinner"></span>
            <span class="loading-indicator__label">"Loading…"</span>
        </div>
    }
}
