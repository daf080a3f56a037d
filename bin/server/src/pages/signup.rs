//! Sign-up page component.

use crate::components::{LINK_CLASS, PageShell, SignupForm};
use leptos::prelude::*;
use subtrack_site::SiteRoute;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <PageShell title=SiteRoute::Signup.title() centered=true>
            <div class="max-w-md w-full space-y-8 bg-white rounded-lg shadow-md p-8">
                <SignupForm/>
                <p class="text-center text-sm text-gray-600">
                    "Already have an account? "
                    <a href=SiteRoute::Login.path() class=LINK_CLASS>
                        "Sign in"
                    </a>
                </p>
            </div>
        </PageShell>
    }
}
