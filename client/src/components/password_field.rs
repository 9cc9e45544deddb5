//! Password input with a show/hide toggle.

use leptos::prelude::*;

#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="auth-field">
            <label for=id class="auth-field__label">{label}</label>
            <div class="auth-field__password">
                <input
                    id=id
                    class="auth-input"
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="auth-field__toggle"
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}
