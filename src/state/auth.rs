//! Auth-gate state for one route guard mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `AuthGuard` owns one [`AuthState`], resolved by a single session
//! verification. [`decide`] turns that state plus the current path into a
//! navigation decision on every render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::VerificationResult;

/// Route that renders the login form.
pub const LOGIN_PATH: &str = "/login";
/// Landing route for authenticated users.
pub const PROTECTED_ROOT: &str = "/";

/// Outcome of session verification as seen by a guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Verification in flight or not yet started.
    #[default]
    Loading,
    Granted,
    Denied,
}

impl AuthState {
    /// Fold a verification result into a resolved state.
    ///
    /// Only `Status(200)` grants access; every other status and every
    /// failure is indistinguishable from "not logged in".
    pub fn from_result(result: &VerificationResult) -> Self {
        if result.is_ok_status() { Self::Granted } else { Self::Denied }
    }
}

/// What a guard does on one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the loading placeholder; no navigation.
    Placeholder,
    /// Render the wrapped children.
    Render,
    /// Navigate to the given path instead of rendering.
    Redirect(&'static str),
}

/// Pure render decision for a guard in `state` at `path`.
pub fn decide(state: AuthState, path: &str) -> GuardDecision {
    let on_login = path == LOGIN_PATH;
    match (state, on_login) {
        (AuthState::Loading, _) => GuardDecision::Placeholder,
        (AuthState::Granted, true) => GuardDecision::Redirect(PROTECTED_ROOT),
        (AuthState::Granted, false) | (AuthState::Denied, true) => GuardDecision::Render,
        (AuthState::Denied, false) => GuardDecision::Redirect(LOGIN_PATH),
    }
}
