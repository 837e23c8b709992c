//! REST API helpers for the admin backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, with the
//! credential policy and optional timeout taken from [`ApiConfig`].
//! Native builds: stubs returning `Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors come back as values. Any completed HTTP response to the
//! verify call is a status, including 401; only requests that never got a
//! response are failures.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginError, LoginRequest, VerificationResult, VerifyError};
use crate::config::ApiConfig;
#[cfg(any(test, feature = "csr"))]
use super::types::ApiMessage;

pub const VERIFY_ENDPOINT: &str = "/users/verify";
pub const LOGIN_ENDPOINT: &str = "/users/login";

#[cfg(any(test, feature = "csr"))]
const STATUS_UNAUTHORIZED: u16 = 401;

#[cfg(any(test, feature = "csr"))]
fn endpoint_url(config: &ApiConfig, path: &str) -> String {
    format!("{}{path}", config.base_url)
}

/// Pull `message` out of an API error body, if the body has one.
#[cfg(any(test, feature = "csr"))]
fn parse_api_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|msg| msg.message)
        .filter(|msg| !msg.trim().is_empty())
}

#[cfg(any(test, feature = "csr"))]
fn rejected_login(status: u16, body: &str) -> LoginError {
    LoginError::Rejected { status, message: parse_api_message(body) }
}

#[cfg(any(test, feature = "csr"))]
fn unauthorized_message(url: &str) -> String {
    format!("unauthorized access: {url}")
}

#[cfg(feature = "csr")]
fn credentials_mode(config: &ApiConfig) -> web_sys::RequestCredentials {
    if config.with_credentials {
        web_sys::RequestCredentials::Include
    } else {
        web_sys::RequestCredentials::SameOrigin
    }
}

/// Race a request against the configured timeout.
#[cfg(feature = "csr")]
async fn send_with_timeout<F>(send: F, timeout_ms: Option<u32>) -> Result<gloo_net::http::Response, VerifyError>
where
    F: std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
{
    use futures::future::{Either, select};

    let Some(ms) = timeout_ms else {
        return send.await.map_err(|e| VerifyError::Network(e.to_string()));
    };
    let send = std::pin::pin!(send);
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(ms));
    match select(send, timer).await {
        Either::Left((result, _)) => result.map_err(|e| VerifyError::Network(e.to_string())),
        Either::Right(((), _)) => Err(VerifyError::Timeout(ms)),
    }
}

/// Ask the backend whether the current browser session is valid via
/// `GET /users/verify`. Exactly one request per call; no retry or caching.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn verify_session(config: &ApiConfig) -> VerificationResult {
    #[cfg(feature = "csr")]
    {
        let url = endpoint_url(config, VERIFY_ENDPOINT);
        let request = gloo_net::http::Request::get(&url).credentials(credentials_mode(config));
        match send_with_timeout(request.send(), config.timeout_ms).await {
            Ok(resp) => {
                let status = resp.status();
                if status == STATUS_UNAUTHORIZED {
                    leptos::logging::warn!("{}", unauthorized_message(&url));
                }
                VerificationResult::Status(status)
            }
            Err(e) => VerificationResult::Failed(e),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        VerificationResult::Failed(VerifyError::Unavailable)
    }
}

/// Submit credentials via `POST /users/login`.
///
/// On success the session cookie is set by the response; the caller is
/// expected to reload so the route guard re-verifies.
///
/// # Errors
///
/// Returns [`LoginError::Network`] when no response arrives and
/// [`LoginError::Rejected`] for non-2xx responses.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn login(config: &ApiConfig, request: &LoginRequest) -> Result<(), LoginError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint_url(config, LOGIN_ENDPOINT);
        let req = gloo_net::http::Request::post(&url)
            .credentials(credentials_mode(config))
            .json(request)
            .map_err(|e| LoginError::Network(e.to_string()))?;
        let resp = send_with_timeout(req.send(), config.timeout_ms)
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        if status == STATUS_UNAUTHORIZED {
            leptos::logging::warn!("{}", unauthorized_message(&url));
        }
        let body = resp.text().await.unwrap_or_default();
        Err(rejected_login(status, &body))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(LoginError::Unavailable)
    }
}
