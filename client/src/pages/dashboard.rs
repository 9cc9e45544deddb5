//! Dashboard page shown after login.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only protected route. Nothing renders until the session has
//! loaded and is authenticated, so protected content never flashes before
//! the guard redirect lands.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{GuardPolicy, Route};

use crate::state::session::SessionContext;
use crate::util::auth::{install_route_guard, may_render};

/// Dashboard page: greets the user and offers logout.
/// Redirects to `/` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    install_route_guard(session, GuardPolicy::Protected, navigate.clone());

    let auth = session.auth();
    let signed_in_as = move || auth.with(|a| a.user().map(|u| format!("Signed in as {u}")).unwrap_or_default());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.logout();
        navigate(Route::Landing.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <Show when=move || auth.with(|a| may_render(GuardPolicy::Protected, a))>
            <div class="dashboard-page">
                <div class="dashboard-card">
                    <h1 class="dashboard-card__title">"Welcome, you're logged in."</h1>
                    <p class="dashboard-card__text">"You have successfully authenticated with Room.me."</p>
                    <p class="dashboard-card__user">{signed_in_as}</p>
                    <button class="auth-button" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </div>
            </div>
        </Show>
    }
}
