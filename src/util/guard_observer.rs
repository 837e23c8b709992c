//! Observer hooks for route guard activity.
//!
//! The guard never logs on its own. Every render decision and verification
//! outcome is reported to a [`GuardObserver`] supplied through context.

use std::sync::Arc;

use crate::net::types::VerificationResult;
use crate::state::auth::{AuthState, GuardDecision};

/// Sink for guard events. All methods default to no-ops.
pub trait GuardObserver {
    /// Called each time the guard evaluates its decision.
    fn on_render(&self, _state: AuthState, _path: &str, _decision: GuardDecision) {}

    /// Called when a verification result is applied to a live mount.
    fn on_verified(&self, _result: &VerificationResult, _state: AuthState) {}

    /// Called when a result arrives after the mount was torn down.
    fn on_discarded(&self, _result: &VerificationResult) {}
}

/// Writes guard events through `leptos::logging`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl GuardObserver for LogObserver {
    fn on_render(&self, state: AuthState, path: &str, decision: GuardDecision) {
        leptos::logging::log!("auth guard: state={state:?} path={path} decision={decision:?}");
    }

    fn on_verified(&self, result: &VerificationResult, state: AuthState) {
        match result {
            VerificationResult::Failed(e) => {
                leptos::logging::warn!("authentication check failed: {e}");
            }
            VerificationResult::Status(status) => {
                leptos::logging::log!("session verified: status={status} state={state:?}");
            }
        }
    }

    fn on_discarded(&self, result: &VerificationResult) {
        leptos::logging::log!("auth guard unmounted before verification finished: {result:?}");
    }
}

/// Silent observer.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GuardObserver for NoopObserver {}

/// Shared observer handle provided to guards through Leptos context.
#[derive(Clone)]
pub struct GuardObserverHandle(pub Arc<dyn GuardObserver + Send + Sync>);

impl GuardObserverHandle {
    pub fn logging() -> Self {
        Self(Arc::new(LogObserver))
    }

    pub fn silent() -> Self {
        Self(Arc::new(NoopObserver))
    }

    pub fn on_render(&self, state: AuthState, path: &str, decision: GuardDecision) {
        self.0.on_render(state, path, decision);
    }

    pub fn on_verified(&self, result: &VerificationResult, state: AuthState) {
        self.0.on_verified(result, state);
    }

    pub fn on_discarded(&self, result: &VerificationResult) {
        self.0.on_discarded(result);
    }
}

impl Default for GuardObserverHandle {
    fn default() -> Self {
        Self::logging()
    }
}

impl std::fmt::Debug for GuardObserverHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GuardObserverHandle")
    }
}
