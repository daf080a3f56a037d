//! About page component.

use crate::components::{Icon, PageShell};
use leptos::prelude::*;
use subtrack_site::about::TAGLINE;
use subtrack_site::{ABOUT_SECTIONS, SiteRoute, VALUES};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageShell title=SiteRoute::About.title()>
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"About SubTrack"</h1>
                <p class="text-xl text-gray-600 max-w-2xl mx-auto">{TAGLINE}</p>
            </div>

            <div class="max-w-3xl mx-auto">
                {ABOUT_SECTIONS
                    .iter()
                    .map(|section| {
                        view! {
                            <div class="about-section bg-white rounded-lg shadow-md p-6 mb-8">
                                <h2 class="text-2xl font-bold text-gray-900 mb-4">
                                    {section.heading}
                                </h2>
                                {section
                                    .paragraphs
                                    .iter()
                                    .map(|paragraph| view! { <p class="text-gray-600 mb-4">{*paragraph}</p> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}

                <div class="bg-white rounded-lg shadow-md p-6">
                    <h2 class="text-2xl font-bold text-gray-900 mb-4">"Our Values"</h2>
                    <ul class="values grid grid-cols-1 md:grid-cols-2 gap-4">
                        {VALUES
                            .iter()
                            .map(|value| {
                                view! {
                                    <li class="flex items-start">
                                        <div class="bg-blue-100 rounded-full p-2 mr-3">
                                            <Icon path=value.icon_path class="w-5 h-5 text-blue-600"/>
                                        </div>
                                        <span class="text-gray-600">{value.label}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
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
    fn renders_sections_and_values() {
        let html = render(|| view! { <AboutPage/> });
        assert!(html.contains("Our Mission"));
        assert!(html.contains("Our Story"));
        assert_eq!(html.matches("class=\"about-section").count(), 2);
        for value in VALUES {
            assert!(html.contains(value.label));
        }
    }
}
