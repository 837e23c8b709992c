//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::auth_guard::AuthGuard;
use crate::config::ApiConfig;
use crate::pages::{
    home::{HomePage, NotFoundPage},
    login::LoginPage,
};
use crate::util::guard_observer::GuardObserverHandle;

/// Root application component.
///
/// The login route and the protected area each sit under their own guard.
/// The protected guard wraps an `Outlet`, so it stays mounted (and does not
/// re-verify) while the user moves between protected pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::load());
    provide_context(GuardObserverHandle::logging());

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <AuthGuard><LoginPage/></AuthGuard> }
                />
                <ParentRoute
                    path=StaticSegment("")
                    view=|| view! { <AuthGuard><Outlet/></AuthGuard> }
                >
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=WildcardSegment("rest") view=NotFoundPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
