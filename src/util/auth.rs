//! Route guard mount lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! A guard verifies the session once per mount. [`GuardMount`] hands out that
//! single verification task and a [`MountToken`] released on owner cleanup,
//! so a late response never touches a torn-down guard. [`launch_guard`] and
//! [`guard_decision`] are the pieces `AuthGuard` is assembled from.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::Cell;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::session::SessionVerifier;
use crate::state::auth::{AuthState, GuardDecision, decide};
use crate::util::guard_observer::GuardObserverHandle;

/// Liveness flag shared between a guard mount and its in-flight task.
#[derive(Clone, Debug)]
pub struct MountToken(Arc<AtomicBool>);

impl MountToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Mark the mount as gone. Idempotent.
    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

/// One guard mount: verifier, observer, and the run-once launch latch.
pub struct GuardMount<V> {
    verifier: V,
    observer: GuardObserverHandle,
    token: MountToken,
    launched: Cell<bool>,
}

impl<V> GuardMount<V>
where
    V: SessionVerifier + Clone + 'static,
{
    pub fn new(verifier: V, observer: GuardObserverHandle) -> Self {
        Self { verifier, observer, token: MountToken::new(), launched: Cell::new(false) }
    }

    pub fn token(&self) -> MountToken {
        self.token.clone()
    }

    /// Hand out the verification task for this mount.
    ///
    /// Returns `Some` on the first call only. The task performs one
    /// verification, then calls `apply` with the resolved state if the mount
    /// is still live. A result that arrives after the mount token is released
    /// is reported to the observer and dropped; the task then yields `None`.
    pub fn launch<F>(&self, apply: F) -> Option<impl Future<Output = Option<AuthState>> + use<V, F>>
    where
        F: FnOnce(AuthState) + 'static,
    {
        if self.launched.replace(true) {
            return None;
        }
        let verifier = self.verifier.clone();
        let observer = self.observer.clone();
        let token = self.token.clone();
        Some(async move {
            let result = verifier.verify_session().await;
            if !token.is_live() {
                observer.on_discarded(&result);
                return None;
            }
            let state = AuthState::from_result(&result);
            observer.on_verified(&result, state);
            apply(state);
            Some(state)
        })
    }
}

/// Start verification for a guard mounted under the current reactive owner.
///
/// The mount token is released when the owner is cleaned up, and the
/// resolved state is written with `try_set` so a disposed signal is left
/// alone. Returns the task to spawn, which the caller drives.
pub fn launch_guard<V>(
    verifier: V,
    observer: GuardObserverHandle,
    state: RwSignal<AuthState>,
) -> Option<impl Future<Output = Option<AuthState>> + use<V>>
where
    V: SessionVerifier + Clone + 'static,
{
    let mount = GuardMount::new(verifier, observer);
    let token = mount.token();
    on_cleanup(move || token.release());
    mount.launch(move |next| {
        state.try_set(next);
    })
}

/// Memoized render decision for a guard, reported to the observer on every
/// evaluation.
pub fn guard_decision(
    state: RwSignal<AuthState>,
    path: Signal<String>,
    observer: GuardObserverHandle,
) -> Memo<GuardDecision> {
    Memo::new(move |_| {
        let current = state.get();
        let current_path = path.get();
        let decision = decide(current, &current_path);
        observer.on_render(current, &current_path, decision);
        decision
    })
}

/// Path to navigate to for `decision`, if any.
pub fn redirect_target(decision: GuardDecision) -> Option<&'static str> {
    match decision {
        GuardDecision::Redirect(target) => Some(target),
        GuardDecision::Placeholder | GuardDecision::Render => None,
    }
}

/// Navigate whenever the guard's decision turns into a redirect.
///
/// Pushes a history entry, the same as following a link.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(decision.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
