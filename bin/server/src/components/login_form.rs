//! Sign-in form and its server function.

use super::{EmailField, PasswordField, SUBMIT_CLASS};
use crate::error::user_message;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Server function for sign-in submissions.
#[server]
pub async fn sign_in(email: String, password: String) -> Result<(), ServerFnError> {
    use crate::error::FormError;
    use crate::server_helpers::get_app_state;
    use subtrack_account::LoginCredentials;
    use subtrack_core::SubmissionId;

    let credentials = LoginCredentials::parse(&email, &password).map_err(|e| {
        tracing::debug!(error = %e, "Sign-in rejected by validation");
        FormError::from(e).into_server_error()
    })?;

    let state = get_app_state().await.map_err(FormError::into_server_error)?;
    let submission = SubmissionId::new();

    state
        .backend
        .sign_in(submission, &credentials)
        .await
        .map_err(|e| {
            tracing::warn!(
                error = %e,
                submission_id = %submission,
                "Sign-in failed"
            );
            FormError::Backend {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    tracing::info!(submission_id = %submission, "Sign-in accepted");

    Ok(())
}

/// Email and password form posting to [`sign_in`].
#[component]
pub fn LoginForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let action = ServerAction::<SignIn>::new();
    let pending = action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        action.dispatch(SignIn {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <div>
            <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                "Sign in to your account"
            </h2>
        </div>
        <form class="login-form mt-8 space-y-6" on:submit=on_submit>
            <EmailField email id="login-email"/>
            <PasswordField password id="password" label="Password"/>
            <div>
                <button type="submit" class=SUBMIT_CLASS disabled=move || pending.get()>
                    "Sign in"
                </button>
            </div>
            {move || {
                action
                    .value()
                    .get()
                    .map(|result| match result {
                        Ok(()) => view! { <p class="form-notice text-sm text-green-700" role="status">"Signed in."</p> }.into_any(),
                        Err(e) => view! { <p class="form-error text-sm text-red-600" role="alert">{user_message(&e)}</p> }.into_any(),
                    })
            }}
        </form>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn login_form_has_email_and_password_fields() {
        let html = render(|| view! { <LoginForm/> });
        assert!(html.contains("id=\"login-email\""));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Sign in"));
        assert!(!html.contains("form-error"));
    }
}
