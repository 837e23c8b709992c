//! Protected landing page.

use leptos::prelude::*;

/// Landing page shown to authenticated users at `/`.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Admin Console"</h1>
            <p class="home-page__subtitle">"You are signed in."</p>
        </div>
    }
}

/// Fallback for unknown paths inside the protected area.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="home-page">
            <p>"Page not found."</p>
        </div>
    }
}
