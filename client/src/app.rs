//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::session::{AuthServices, SessionContext};
use crate::util::storage::LocalStorageSlot;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the session context and auth services, provides them to every
/// page, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new(LocalStorageSlot);
    provide_context(session);
    provide_context(AuthServices::demo());

    // Effects only run in the browser, so the server render and the first
    // client render both see a loading, logged-out session.
    Effect::new(move || session.rehydrate());

    view! {
        <Stylesheet id="leptos" href="/pkg/roomme.css"/>
        <Title text="Room.me"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
