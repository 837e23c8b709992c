//! Outcome and wire types for the admin API.
//!
//! DESIGN
//! ======
//! Transport outcomes are plain values so the route guard can fold every
//! failure into a single denied state without any error plumbing of its own.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Status the verify endpoint returns for a valid session. No other code
/// counts as authenticated.
pub const STATUS_OK: u16 = 200;

/// Message shown under the login form when the server gave no better one.
pub const GENERIC_LOGIN_ERROR: &str = "An error occurred.";

/// Why a verification request produced no HTTP response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("session verification is only available in the browser")]
    Unavailable,
}

/// Outcome of one session verification call.
///
/// Any completed HTTP exchange is a `Status`, whatever the code. `Failed`
/// is reserved for requests that never got a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationResult {
    Status(u16),
    Failed(VerifyError),
}

impl VerificationResult {
    /// Whether this result is the single "authenticated" signal.
    pub fn is_ok_status(&self) -> bool {
        matches!(self, Self::Status(STATUS_OK))
    }
}

/// Body of `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Error body shape used by the API: `{ "message": "..." }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure of a login submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("network error: {0}")]
    Network(String),
    #[error("login rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("login is only available in the browser")]
    Unavailable,
}

impl LoginError {
    /// Text for the message line under the login form.
    ///
    /// Prefers the server-provided message; everything else collapses to
    /// [`GENERIC_LOGIN_ERROR`].
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_LOGIN_ERROR.to_owned(),
        }
    }
}
