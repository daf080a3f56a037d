//! Features page component.

use crate::components::PageShell;
use leptos::prelude::*;
use subtrack_site::{FEATURES, SiteRoute};

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <PageShell title=SiteRoute::Features.title()>
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Features"</h1>
                <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                    "Everything you need to stay on top of your recurring expenses."
                </p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card bg-white rounded-lg shadow-md p-6">
                                <h2 class="text-xl font-semibold text-gray-900 mb-2">
                                    {feature.title}
                                </h2>
                                <p class="text-gray-600">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageShell>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn one_card_per_feature() {
        let html = render(|| view! { <FeaturesPage/> });
        assert_eq!(html.matches("class=\"feature-card").count(), FEATURES.len());
    }
}
