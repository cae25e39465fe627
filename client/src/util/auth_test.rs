use std::cell::RefCell;
use std::time::Duration;

use super::*;
use crate::state::auth::Session;
use crate::state::session_store::SESSION_STORAGE_KEY;
use crate::test_support::{TokioTimer, memory_store};
use crate::util::storage::KeyValueStorage;
use crate::util::timer::Timer;

const SETTLE: Duration = Duration::from_millis(500);

fn ann() -> Session {
    Session::new("42", Some("Ann".to_owned()), "ann@example.com").unwrap()
}

// =============================================================
// Immediate decisions
// =============================================================

#[tokio::test(start_paused = true)]
async fn context_session_authorizes_without_delay() {
    let (store, _) = memory_store();
    let ctx = SessionContext::new();
    ctx.set(Some(ann()));

    let start = tokio::time::Instant::now();
    let decision = verify_session(ctx, &store, TokioTimer.sleep(SETTLE)).await;
    assert_eq!(decision, GuardDecision::Authorized);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn empty_store_is_unauthorized_without_delay() {
    let (store, _) = memory_store();
    let ctx = SessionContext::new();

    let start = tokio::time::Instant::now();
    let decision = verify_session(ctx, &store, TokioTimer.sleep(SETTLE)).await;
    assert_eq!(decision, GuardDecision::Unauthorized);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn store_value_missing_user_id_is_unauthorized_without_delay() {
    for raw in [r#"{"name":"Ann","email":"a@b.com"}"#, r#"{"userId":""}"#, "{corrupt"] {
        let (store, storage) = memory_store();
        storage.set_item(SESSION_STORAGE_KEY, raw).unwrap();
        let ctx = SessionContext::new();

        let start = tokio::time::Instant::now();
        let decision = verify_session(ctx, &store, TokioTimer.sleep(SETTLE)).await;
        assert_eq!(decision, GuardDecision::Unauthorized, "{raw}");
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}

#[tokio::test(start_paused = true)]
async fn invalid_context_write_cannot_authorize() {
    let (store, storage) = memory_store();
    storage.set_item(SESSION_STORAGE_KEY, r#"{"name":"Ann"}"#).unwrap();
    let ctx = SessionContext::new();
    ctx.set(Session::new("", Some("Ann".to_owned()), "a@b.com"));

    let decision = verify_session(ctx, &store, TokioTimer.sleep(SETTLE)).await;
    assert_eq!(decision, GuardDecision::Unauthorized);
}

// =============================================================
// Hydration race
// =============================================================

#[tokio::test(start_paused = true)]
async fn waits_for_context_to_settle_then_authorizes() {
    let (store, _) = memory_store();
    store.save(&ann()).unwrap();
    let ctx = SessionContext::new();

    let start = tokio::time::Instant::now();
    let (decision, ()) = tokio::join!(verify_session(ctx, &store, TokioTimer.sleep(SETTLE)), async {
        tokio::time::sleep(Duration::from_millis(80)).await;
        ctx.hydrate(&store);
    });
    assert_eq!(decision, GuardDecision::Authorized);
    assert_eq!(start.elapsed(), Duration::from_millis(80));
}

#[tokio::test(start_paused = true)]
async fn never_settling_context_times_out_unauthorized() {
    let (store, _) = memory_store();
    store.save(&ann()).unwrap();
    let ctx = SessionContext::new();

    let start = tokio::time::Instant::now();
    let decision = verify_session(ctx, &store, TokioTimer.sleep(SETTLE)).await;
    assert_eq!(decision, GuardDecision::Unauthorized);
    assert_eq!(start.elapsed(), SETTLE);
}

#[tokio::test(start_paused = true)]
async fn settled_context_without_session_is_unauthorized() {
    let (store, _) = memory_store();
    let ctx = SessionContext::new();
    ctx.hydrate(&store);
    // Written after hydration, e.g. by another tab.
    store.save(&ann()).unwrap();

    let start = tokio::time::Instant::now();
    let decision = verify_session(ctx, &store, TokioTimer.sleep(SETTLE)).await;
    assert_eq!(decision, GuardDecision::Unauthorized);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn late_hydration_after_timeout_does_not_change_result() {
    let (store, _) = memory_store();
    store.save(&ann()).unwrap();
    let ctx = SessionContext::new();

    let (decision, ()) = tokio::join!(verify_session(ctx, &store, TokioTimer.sleep(SETTLE)), async {
        tokio::time::sleep(SETTLE * 2).await;
        ctx.hydrate(&store);
    });
    assert_eq!(decision, GuardDecision::Unauthorized);
    assert!(ctx.current_untracked().is_some());
}

// =============================================================
// Redirect helpers
// =============================================================

#[test]
fn only_unauthorized_redirects() {
    assert!(!should_redirect_unauth(GuardDecision::Pending));
    assert!(!should_redirect_unauth(GuardDecision::Authorized));
    assert!(should_redirect_unauth(GuardDecision::Unauthorized));
}

#[test]
fn guard_redirect_replaces_history_entry() {
    assert!(replace_navigation().replace);
}

#[test]
fn decision_defaults_to_pending() {
    assert_eq!(GuardDecision::default(), GuardDecision::Pending);
}

// =============================================================
// Redirect
// =============================================================

fn run_redirect(decisions: &[GuardDecision]) -> Vec<(String, bool)> {
    let calls = RefCell::new(Vec::new());
    let navigate = |path: &str, options: NavigateOptions| calls.borrow_mut().push((path.to_owned(), options.replace));
    let mut redirected = false;
    for decision in decisions {
        redirected = redirect_step(*decision, redirected, &navigate);
    }
    calls.into_inner()
}

#[test]
fn unauthorized_replaces_history_with_sign_in_once() {
    let calls = run_redirect(&[GuardDecision::Pending, GuardDecision::Unauthorized, GuardDecision::Unauthorized]);
    assert_eq!(calls, vec![(SIGN_IN_PATH.to_owned(), true)]);
    assert_eq!(SIGN_IN_PATH, "/auth/sign-in");
}

#[test]
fn pending_and_authorized_never_navigate() {
    assert!(run_redirect(&[GuardDecision::Pending, GuardDecision::Authorized, GuardDecision::Pending]).is_empty());
}
