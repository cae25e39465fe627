use super::*;

fn render(decision: GuardDecision) -> String {
    let owner = Owner::new();
    owner.set();
    let decision = RwSignal::new(decision);
    view! {
        <GuardedContent decision>
            <p class="race-card">"Race card"</p>
        </GuardedContent>
    }
    .to_html()
}

#[test]
fn pending_shows_loading_indicator_only() {
    let html = render(GuardDecision::Pending);
    assert!(html.contains("loading-indicator"), "{html}");
    assert!(!html.contains("race-card"), "{html}");
}

#[test]
fn authorized_shows_children() {
    let html = render(GuardDecision::Authorized);
    assert!(html.contains("race-card"), "{html}");
    assert!(!html.contains("loading-indicator"), "{html}");
}

#[test]
fn unauthorized_renders_nothing_while_redirecting() {
    let html = render(GuardDecision::Unauthorized);
    assert!(!html.contains("race-card"), "{html}");
    assert!(!html.contains("loading-indicator"), "{html}");
}
