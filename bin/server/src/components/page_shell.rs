//! Layout shell shared by every page.

use super::{Footer, Header};
use leptos::prelude::*;
use leptos_meta::Title;

const MAIN_CLASS: &str = "flex-grow container mx-auto px-4 py-8";
const CENTERED_MAIN_CLASS: &str =
    "flex-grow container mx-auto px-4 py-8 flex items-center justify-center";

/// Wraps page content in the header, a `<main>` element and the footer.
///
/// `centered` is for the single-card account pages.
#[component]
pub fn PageShell(
    title: &'static str,
    #[prop(optional)] centered: bool,
    children: Children,
) -> impl IntoView {
    let main_class = if centered { CENTERED_MAIN_CLASS } else { MAIN_CLASS };

    view! {
        <Title text=title/>
        <div class="min-h-screen flex flex-col">
            <Header/>
            <main class=main_class>{children()}</main>
            <Footer/>
        </div>
    }
}
