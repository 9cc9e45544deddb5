//! Login/signup form shared by both auth pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form validates locally, waits out the simulated call, then lets the
//! `session` completion step decide between a navigation and an error
//! message. The deferred step is tied to the view's lifetime, so leaving the
//! page while a submission is pending drops the result.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::form::{complete_login, complete_signup};
use session::validate::{validate_login, validate_signup};
use session::{AuthMode, FormError, FormStatus, LoginForm, Route, SIMULATED_CALL_DELAY, SignupForm, ViewLifetime};

use crate::components::password_field::PasswordField;
use crate::state::session::{AuthServices, SessionContext};
use crate::util::deferred::spawn_after_delay;

const TAGLINE: &str = "Room.me is an innovative video conference product that revolutionizes virtual meetings.";

pub fn heading(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Welcome back to Room.me!",
        AuthMode::Signup => "Join Room.me Today!",
    }
}

pub fn submit_label(mode: AuthMode, loading: bool) -> &'static str {
    match (mode, loading) {
        (AuthMode::Login, false) => "Sign in",
        (AuthMode::Login, true) => "Signing in...",
        (AuthMode::Signup, false) => "Sign up",
        (AuthMode::Signup, true) => "Signing up...",
    }
}

/// Prompt and link text pointing at the other auth page.
pub fn switch_text(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::Login => ("Don't have an account?", "Sign up"),
        AuthMode::Signup => ("Already have an account?", "Sign in"),
    }
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let services = expect_context::<AuthServices>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let terms_accepted = RwSignal::new(false);
    let status = RwSignal::new(FormStatus::default());

    let lifetime = ViewLifetime::new();
    let teardown = lifetime.clone();
    on_cleanup(move || teardown.end());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match mode {
            AuthMode::Login => {
                let form = LoginForm {
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                    remember: remember.get_untracked(),
                };
                let validation = validate_login(&form);
                let verifier = services.verifier.clone();
                submit(status, lifetime.clone(), navigate.clone(), validation, move || {
                    session.with_store(|store| complete_login(&form, verifier.as_ref(), store))
                });
            }
            AuthMode::Signup => {
                let form = SignupForm {
                    name: name.get_untracked(),
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                    confirm_password: confirm_password.get_untracked(),
                    terms_accepted: terms_accepted.get_untracked(),
                };
                let validation = validate_signup(&form);
                let registrar = services.registrar.clone();
                submit(status, lifetime.clone(), navigate.clone(), validation, move || {
                    session.with_store(|store| complete_signup(&form, registrar.as_ref(), store))
                });
            }
        }
    };

    let (switch_prompt, switch_link) = switch_text(mode);
    let loading = move || status.with(|s| s.loading);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__brand">
                    <span class="auth-card__logo"></span>
                    <span class="auth-card__wordmark">"ROOM.ME"</span>
                </div>
                <h1 class="auth-card__title">{heading(mode)}</h1>
                <p class="auth-card__subtitle">{TAGLINE}</p>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || status.with(|s| s.error.is_some())>
                        <div class="auth-form__error" role="alert">
                            {move || status.with(FormStatus::message).unwrap_or_default()}
                        </div>
                    </Show>

                    {(mode == AuthMode::Signup).then(|| view! {
                        <div class="auth-field">
                            <label for="name" class="auth-field__label">"Full name"</label>
                            <input
                                id="name"
                                class="auth-input"
                                type="text"
                                placeholder="Enter your full name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </div>
                    })}

                    <div class="auth-field">
                        <label for="email" class="auth-field__label">"Email address"</label>
                        <input
                            id="email"
                            class="auth-input"
                            type="email"
                            placeholder="Enter your email address"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>

                    <PasswordField id="password" label="Password" placeholder="Enter your password" value=password/>

                    {(mode == AuthMode::Signup).then(|| view! {
                        <PasswordField
                            id="confirm-password"
                            label="Confirm password"
                            placeholder="Confirm your password"
                            value=confirm_password
                        />
                    })}

                    {match mode {
                        AuthMode::Login => view! {
                            <label class="auth-form__check" for="remember">
                                <input
                                    id="remember"
                                    type="checkbox"
                                    prop:checked=move || remember.get()
                                    on:change=move |ev| remember.set(event_target_checked(&ev))
                                />
                                "Remember for 30 days"
                            </label>
                        }
                            .into_any(),
                        AuthMode::Signup => view! {
                            <label class="auth-form__check" for="terms">
                                <input
                                    id="terms"
                                    type="checkbox"
                                    prop:checked=move || terms_accepted.get()
                                    on:change=move |ev| terms_accepted.set(event_target_checked(&ev))
                                />
                                "I accept the terms and conditions"
                            </label>
                        }
                            .into_any(),
                    }}

                    <button type="submit" class="auth-button" disabled=loading>
                        {move || submit_label(mode, loading())}
                    </button>

                    <p class="auth-form__switch">
                        {switch_prompt}
                        " "
                        <a href=mode.alternate().path()>{switch_link}</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

/// Start a submission: record validation, then settle after the simulated delay.
fn submit<N, C>(
    status: RwSignal<FormStatus>,
    lifetime: ViewLifetime,
    navigate: N,
    validation: Result<(), FormError>,
    complete: C,
) where
    N: Fn(&str, NavigateOptions) + 'static,
    C: FnOnce() -> Option<Result<Route, FormError>> + 'static,
{
    let started = status.try_update(|s| s.begin(validation)).unwrap_or(false);
    if !started {
        return;
    }
    spawn_after_delay(lifetime, SIMULATED_CALL_DELAY, move || {
        let Some(outcome) = complete() else {
            return;
        };
        if let Some(route) = status.try_update(|s| s.settle(outcome)).flatten() {
            navigate(route.path(), NavigateOptions::default());
        }
    });
}
