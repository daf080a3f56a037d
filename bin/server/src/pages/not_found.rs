//! Fallback for unknown paths.

use crate::components::PageShell;
use leptos::prelude::*;
use subtrack_site::SiteRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <PageShell title="Page not found - SubTrack" centered=true>
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Page not found"</h1>
                <p class="text-gray-600 mb-6">"The page you were looking for doesn't exist."</p>
                <a href=SiteRoute::Home.path() class="text-blue-600 hover:text-blue-500">
                    "Return to Home"
                </a>
            </div>
        </PageShell>
    }
}
