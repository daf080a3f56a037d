//! Home page component.

use crate::components::PageShell;
use leptos::prelude::*;
use subtrack_site::SiteRoute;

/// Landing page with the product pitch and entry points.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell title=SiteRoute::Home.title()>
            <section class="text-center py-16">
                <h1 class="text-5xl font-bold text-gray-900 mb-6">
                    "Know what you pay for, every month"
                </h1>
                <p class="text-xl text-gray-600 max-w-2xl mx-auto mb-10">
                    "SubTrack keeps all of your subscriptions in one place, warns you before \
                     they renew, and shows you where the money goes."
                </p>
                <div class="flex justify-center gap-4">
                    <a
                        href=SiteRoute::Signup.path()
                        class="py-3 px-6 rounded-md font-medium bg-blue-600 text-white hover:bg-blue-700"
                    >
                        "Start tracking for free"
                    </a>
                    <a
                        href=SiteRoute::Pricing.path()
                        class="py-3 px-6 rounded-md font-medium bg-gray-100 text-gray-900 hover:bg-gray-200"
                    >
                        "See pricing"
                    </a>
                </div>
            </section>
        </PageShell>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn home_links_to_signup_and_pricing() {
        let html = render(|| view! { <HomePage/> });
        assert!(html.contains("href=\"/signup\""));
        assert!(html.contains("See pricing"));
    }
}
