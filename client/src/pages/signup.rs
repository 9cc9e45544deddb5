//! Signup page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::{AuthMode, GuardPolicy};

use crate::components::auth_form::AuthForm;
use crate::state::session::SessionContext;
use crate::util::auth::install_route_guard;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    install_route_guard(session, GuardPolicy::PublicOnly, use_navigate());

    view! { <AuthForm mode=AuthMode::Signup/> }
}
