//! Session verification seam used by the route guard.
//!
//! The guard only knows [`SessionVerifier`]; the browser build plugs in
//! [`HttpSessionVerifier`], tests plug in scripted verifiers.

use std::future::Future;

use super::api;
use super::types::VerificationResult;
use crate::config::ApiConfig;

/// Asks a remote authority whether the current credential is valid.
///
/// Implementations perform one check per call with no local caching.
pub trait SessionVerifier {
    fn verify_session(&self) -> impl Future<Output = VerificationResult>;
}

/// Verifier backed by `GET /users/verify`.
#[derive(Clone, Debug, Default)]
pub struct HttpSessionVerifier {
    config: ApiConfig,
}

impl HttpSessionVerifier {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl SessionVerifier for HttpSessionVerifier {
    fn verify_session(&self) -> impl Future<Output = VerificationResult> {
        api::verify_session(&self.config)
    }
}
