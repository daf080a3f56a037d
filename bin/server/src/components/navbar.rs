//! Primary navigation.

use leptos::prelude::*;
use subtrack_site::NAV_LINKS;

/// Renders [`NAV_LINKS`] in order as plain anchors.
///
/// The router intercepts same-origin anchors, so these navigate client-side
/// once the page has hydrated.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <ul class="flex space-x-6">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a
                                    href=link.href()
                                    class="text-gray-600 hover:text-blue-600 transition-colors"
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn every_link_targets_its_declared_path() {
        let html = render(|| view! { <Navbar/> });

        for link in NAV_LINKS {
            let anchor = format!("href=\"{}\"", link.href());
            assert!(html.contains(&anchor), "missing {anchor} in {html}");
            assert!(html.contains(link.label));
        }
    }

    #[test]
    fn links_render_in_declared_order() {
        let html = render(|| view! { <Navbar/> });

        let positions: Vec<_> = NAV_LINKS
            .iter()
            .map(|link| {
                html.find(&format!("href=\"{}\"", link.href()))
                    .expect("anchor rendered")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn pricing_label_follows_pricing_anchor() {
        let html = render(|| view! { <Navbar/> });
        let anchor = html.find("href=\"/pricing\"").expect("pricing anchor");
        let close = anchor + html[anchor..].find("</a>").expect("anchor closed");
        assert!(html[anchor..close].contains("Pricing"));
    }
}
