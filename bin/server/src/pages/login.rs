//! Sign-in page component.

use crate::components::{LINK_CLASS, LoginForm, PageShell};
use leptos::prelude::*;
use subtrack_site::SiteRoute;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PageShell title=SiteRoute::Login.title() centered=true>
            <div class="max-w-md w-full space-y-8 bg-white rounded-lg shadow-md p-8">
                <LoginForm/>
                <div class="flex items-center justify-between">
                    <a href=SiteRoute::ForgotPassword.path() class=LINK_CLASS>
                        "Forgot your password?"
                    </a>
                    <a href=SiteRoute::Signup.path() class=LINK_CLASS>
                        "Create an account"
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
        let html = render(|| view! { <LoginPage/> });
        assert_eq!(html.matches("<header").count(), 1);
        assert_eq!(html.matches("<footer").count(), 1);
    }

    #[test]
    fn links_to_password_reset() {
        let html = render(|| view! { <LoginPage/> });
        assert!(html.contains("href=\"/forgot-password\""));
        assert!(html.contains("Forgot your password?"));
    }
}
