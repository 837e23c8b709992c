//! Route guard gating a subtree behind session verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps both the login route and the protected area. Each mount verifies
//! the session once, then redirects or renders based on the result and the
//! current path. Verification errors are shown as "not logged in".

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ApiConfig;
use crate::net::session::HttpSessionVerifier;
use crate::state::auth::{AuthState, GuardDecision};
use crate::util::auth::{guard_decision, install_guard_redirect, launch_guard};
use crate::util::guard_observer::GuardObserverHandle;

/// Guard component. Shows a spinner until the session check resolves.
///
/// Reads [`ApiConfig`] and [`GuardObserverHandle`] from context, falling back
/// to defaults when the app did not provide them.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let observer = use_context::<GuardObserverHandle>().unwrap_or_default();
    let state = RwSignal::new(AuthState::Loading);

    // Component bodies run once per mount, so this launches exactly once.
    if let Some(task) = launch_guard(HttpSessionVerifier::new(config), observer.clone(), state) {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            task.await;
        });
        #[cfg(not(feature = "csr"))]
        drop(task);
    }

    let location = use_location();
    let decision = guard_decision(state, location.pathname.into(), observer);
    install_guard_redirect(decision, use_navigate());

    move || match decision.get() {
        GuardDecision::Placeholder => view! {
            <div class="auth-guard-loading">
                <div class="auth-guard-spinner"></div>
            </div>
        }
        .into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
