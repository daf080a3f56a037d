//! Site footer.

use leptos::prelude::*;
use subtrack_site::{BRAND, FOOTER_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer bg-gray-800 text-gray-300">
            <div class="container mx-auto px-4 py-8 flex flex-col md:flex-row justify-between items-center gap-4">
                <div class="text-lg font-semibold text-white">{BRAND}</div>
                <ul class="flex space-x-6 text-sm">
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.href() class="hover:text-white transition-colors">
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <p class="text-sm">{format!("\u{a9} {BRAND}. All rights reserved.")}</p>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn footer_links_render() {
        let html = render(|| view! { <Footer/> });
        for link in FOOTER_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.href())));
        }
        assert!(html.contains("All rights reserved."));
    }
}
