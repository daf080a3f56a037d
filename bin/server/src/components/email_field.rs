//! Controlled input fields for the account forms.
//!
//! The displayed value always comes from the signal. `value=` covers the
//! server-rendered HTML, `prop:value` keeps the live DOM property in step
//! after hydration.

use super::INPUT_CLASS;
use leptos::prelude::*;

/// Labelled, required email input bound to `email`.
#[component]
pub fn EmailField(
    email: RwSignal<String>,
    #[prop(default = "email")] id: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700 mb-1">
                "Email address"
            </label>
            <input
                id=id
                name="email"
                type="email"
                autocomplete="email"
                required
                class=INPUT_CLASS
                placeholder="Email address"
                value=move || email.get()
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled, required password input bound to `password`.
#[component]
pub fn PasswordField(
    password: RwSignal<String>,
    id: &'static str,
    label: &'static str,
    #[prop(default = "current-password")] autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700 mb-1">
                {label}
            </label>
            <input
                id=id
                name=id
                type="password"
                autocomplete=autocomplete
                required
                class=INPUT_CLASS
                placeholder=label
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn email_field_starts_empty() {
        let html = render(|| {
            let email = RwSignal::new(String::new());
            view! { <EmailField email/> }
        });
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("required"));
        assert!(html.contains("value=\"\""));
    }

    #[test]
    fn email_field_renders_signal_value() {
        let html = render(|| {
            let email = RwSignal::new(String::new());
            for keystroke in ["m", "ma", "max", "max@", "max@example.com"] {
                email.set(keystroke.to_string());
            }
            view! { <EmailField email/> }
        });
        assert!(html.contains("value=\"max@example.com\""));
    }

    #[test]
    fn password_field_never_renders_its_value() {
        let html = render(|| {
            let password = RwSignal::new("hunter2".to_string());
            view! { <PasswordField password id="password" label="Password"/> }
        });
        assert!(html.contains("type=\"password\""));
        assert!(!html.contains("hunter2"));
    }
}
