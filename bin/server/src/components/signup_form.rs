//! Sign-up form and its server function.

use super::{EmailField, PasswordField, SUBMIT_CLASS};
use crate::error::user_message;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use subtrack_account::MIN_PASSWORD_LEN;

/// Server function for sign-up submissions.
#[server]
pub async fn sign_up(
    email: String,
    password: String,
    confirm_password: String,
) -> Result<(), ServerFnError> {
    use crate::error::FormError;
    use crate::server_helpers::get_app_state;
    use subtrack_account::SignupCredentials;
    use subtrack_core::SubmissionId;

    let credentials = SignupCredentials::parse(&email, &password, &confirm_password)
        .map_err(|e| {
            tracing::debug!(error = %e, "Sign-up rejected by validation");
            FormError::from(e).into_server_error()
        })?;

    let state = get_app_state().await.map_err(FormError::into_server_error)?;
    let submission = SubmissionId::new();

    state
        .backend
        .sign_up(submission, &credentials)
        .await
        .map_err(|e| {
            tracing::warn!(
                error = %e,
                submission_id = %submission,
                email = %credentials.email(),
                "Sign-up failed"
            );
            FormError::Backend {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    tracing::info!(submission_id = %submission, "Account created");

    Ok(())
}

/// Account creation form posting to [`sign_up`].
#[component]
pub fn SignupForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let action = ServerAction::<SignUp>::new();
    let pending = action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        action.dispatch(SignUp {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        });
    };

    view! {
        <div>
            <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                "Create your account"
            </h2>
            <p class="mt-2 text-center text-sm text-gray-600">
                {format!("Passwords need at least {MIN_PASSWORD_LEN} characters.")}
            </p>
        </div>
        <form class="signup-form mt-8 space-y-6" on:submit=on_submit>
            <EmailField email id="signup-email"/>
            <PasswordField password id="password" label="Password" autocomplete="new-password"/>
            <PasswordField
                password=confirm_password
                id="confirm_password"
                label="Confirm password"
                autocomplete="new-password"
            />
            <div>
                <button type="submit" class=SUBMIT_CLASS disabled=move || pending.get()>
                    "Sign up"
                </button>
            </div>
            {move || {
                action
                    .value()
                    .get()
                    .map(|result| match result {
                        Ok(()) => view! { <p class="form-notice text-sm text-green-700" role="status">"Account created."</p> }.into_any(),
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
    fn signup_form_has_confirmation_field() {
        let html = render(|| view! { <SignupForm/> });
        assert!(html.contains("id=\"signup-email\""));
        assert!(html.contains("id=\"confirm_password\""));
        assert!(html.contains("autocomplete=\"new-password\""));
        assert!(html.contains("at least 8 characters"));
    }
}
