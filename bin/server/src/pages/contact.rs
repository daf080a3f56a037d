//! Contact page component.

use crate::components::PageShell;
use leptos::prelude::*;
use subtrack_site::{SUPPORT_EMAIL, SiteRoute};

#[component]
pub fn ContactPage() -> impl IntoView {
    let mailto = format!("mailto:{SUPPORT_EMAIL}");

    view! {
        <PageShell title=SiteRoute::Contact.title()>
            <div class="max-w-2xl mx-auto text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Contact us"</h1>
                <p class="text-xl text-gray-600 mb-8">
                    "Questions about your account, billing, or a plan? We're happy to help."
                </p>
                <div class="bg-white rounded-lg shadow-md p-6">
                    <p class="text-gray-600 mb-2">"Email our support team at"</p>
                    <a href=mailto class="text-2xl font-semibold text-blue-600 hover:text-blue-500">
                        {SUPPORT_EMAIL}
                    </a>
                    <p class="text-gray-600 mt-6">
                        "Students and non-profits: ask us about special pricing, or "
                        <a href=SiteRoute::Pricing.path() class="text-blue-600 hover:text-blue-500">
                            "compare plans"
                        </a> "."
                    </p>
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
    fn contact_page_links_support_address() {
        let html = render(|| view! { <ContactPage/> });
        assert!(html.contains(&format!("href=\"mailto:{SUPPORT_EMAIL}\"")));
    }
}
