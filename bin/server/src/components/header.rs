//! Site header.

use super::Navbar;
use leptos::prelude::*;
use subtrack_site::{BRAND, SiteRoute};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header bg-white shadow-md">
            <div class="container mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <a href=SiteRoute::Home.path() class="text-2xl font-bold text-blue-600">
                        {BRAND}
                    </a>
                    <Navbar/>
                </div>
            </div>
        </header>
    }
}
