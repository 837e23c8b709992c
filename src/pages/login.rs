//! Login page: email + password form posting to `/users/login`.
//!
//! Rendered inside an `AuthGuard`, so only unauthenticated users reach it.
//! A successful login reloads the page; the guard then remounts, re-verifies,
//! and redirects to `/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::types::LoginRequest;

const MISSING_FIELDS_MESSAGE: &str = "Enter your email and password.";

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Logging in..." } else { "Login" }
}

#[cfg(feature = "csr")]
fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            leptos::logging::warn!("page reload failed: {e:?}");
        }
    }
}

/// Post the credentials and either reload or surface the error message.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn submit_login(config: ApiConfig, request: LoginRequest, error: RwSignal<Option<String>>, busy: RwSignal<bool>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::login(&config, &request).await {
            Ok(()) => reload_page(),
            Err(e) => {
                leptos::logging::warn!("login failed: {e}");
                error.set(Some(e.user_message()));
            }
        }
        busy.set(false);
    });
    #[cfg(not(feature = "csr"))]
    busy.set(false);
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        submit_login(config.clone(), request, error, busy);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="email">"Email"</label>
                    <input
                        class="login-input"
                        type="email"
                        id="email"
                        name="email"
                        placeholder="Enter your email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        class="login-input"
                        type="password"
                        id="password"
                        name="password"
                        placeholder="Enter your password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}
