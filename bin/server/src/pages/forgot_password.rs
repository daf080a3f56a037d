//! Forgot-password page, its form and server function.
//!
//! The reply to a submission is always [`RESET_CONFIRMATION`]. Even a
//! transport failure shows it, so the page says nothing about whether an
//! account exists.

use crate::components::{EmailField, LINK_CLASS, PageShell, SUBMIT_CLASS};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use subtrack_account::RESET_CONFIRMATION;
use subtrack_site::SiteRoute;

/// Server function for password-reset submissions.
///
/// Only fails when application state is missing. Validation, rate limiting
/// and backend errors are absorbed by the reset service.
#[server]
pub async fn request_password_reset(email: String) -> Result<String, ServerFnError> {
    use crate::error::FormError;
    use crate::server_helpers::get_app_state;

    let state = get_app_state().await.map_err(FormError::into_server_error)?;
    let outcome = state.password_reset.request_reset(&email).await;

    tracing::debug!(dispatched = outcome.is_dispatched(), "Password reset request handled");

    Ok(outcome.message().to_string())
}

#[cfg(feature = "hydrate")]
fn show_confirmation(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            leptos::logging::warn!("could not show reset confirmation: {e:?}");
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn show_confirmation(_message: &str) {}

/// Turns any server reply into the confirmation notice.
///
/// Failures are only logged to the console; the user sees the same message.
fn apply_reset_result(
    result: Result<String, ServerFnError>,
    notice: RwSignal<Option<&'static str>>,
) {
    if let Err(e) = result {
        leptos::logging::warn!("password reset request failed: {e}");
    }
    notice.set(Some(RESET_CONFIRMATION));
    show_confirmation(RESET_CONFIRMATION);
}

/// Single-field form posting to [`request_password_reset`].
#[component]
pub fn ForgotPasswordForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<&'static str>);
    let action = ServerAction::<RequestPasswordReset>::new();
    let pending = action.pending();

    Effect::new(move |_| {
        if let Some(result) = action.value().get() {
            apply_reset_result(result, notice);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        leptos::logging::log!("password reset requested for {email}");
        action.dispatch(RequestPasswordReset { email });
    };

    view! {
        <form class="forgot-password-form mt-8 space-y-6" on:submit=on_submit>
            <EmailField email id="reset-email"/>
            <div>
                <button type="submit" class=SUBMIT_CLASS disabled=move || pending.get()>
                    "Send reset link"
                </button>
            </div>
            {move || {
                notice
                    .get()
                    .map(|message| {
                        view! { <p class="form-notice text-sm text-green-700" role="status">{message}</p> }
                    })
            }}
        </form>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <PageShell title=SiteRoute::ForgotPassword.title() centered=true>
            <div class="max-w-md w-full space-y-8 bg-white rounded-lg shadow-md p-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        "Reset your password"
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        "Enter your email address and we'll send you a link to reset your password."
                    </p>
                </div>
                <ForgotPasswordForm/>
                <div class="text-center">
                    <a href=SiteRoute::Login.path() class=LINK_CLASS>
                        "Back to sign in"
                    </a>
                </div>
            </div>
        </PageShell>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn renders_a_single_layout() {
        let html = render(|| view! { <ForgotPasswordPage/> });
        assert_eq!(html.matches("<header").count(), 1);
        assert_eq!(html.matches("<footer").count(), 1);
    }

    #[test]
    fn page_has_form_and_back_link() {
        let html = render(|| view! { <ForgotPasswordPage/> });
        assert!(html.contains("Reset your password"));
        assert!(html.contains("id=\"reset-email\""));
        assert!(html.contains("Back to sign in"));
        assert!(html.contains("href=\"/login\""));
    }

    #[test]
    fn confirmation_is_hidden_until_submitted() {
        let html = render(|| view! { <ForgotPasswordForm/> });
        assert!(!html.contains(RESET_CONFIRMATION));
    }

    #[test]
    fn successful_reply_shows_confirmation() {
        Owner::new_root(None).with(|| {
            let notice = RwSignal::new(None);
            apply_reset_result(Ok(RESET_CONFIRMATION.to_string()), notice);
            assert_eq!(notice.get_untracked(), Some(RESET_CONFIRMATION));
        });
    }

    #[test]
    fn transport_failure_still_shows_confirmation() {
        Owner::new_root(None).with(|| {
            let notice = RwSignal::new(None);
            let failure = ServerFnError::Request("failed to fetch".to_string());
            apply_reset_result(Err(failure), notice);
            assert_eq!(notice.get_untracked(), Some(RESET_CONFIRMATION));
        });
    }

    #[tokio::test]
    async fn server_fn_without_app_state_still_confirms() {
        let result = request_password_reset("dana@example.com".to_string()).await;
        assert!(result.is_err());

        Owner::new_root(None).with(|| {
            let notice = RwSignal::new(None);
            apply_reset_result(result, notice);
            assert_eq!(notice.get_untracked(), Some(RESET_CONFIRMATION));
        });
    }
}
