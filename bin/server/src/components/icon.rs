//! Outline icons drawn from a single SVG path.

use leptos::prelude::*;

/// A 24x24 stroked outline icon.
#[component]
pub fn Icon(path: &'static str, #[prop(default = "w-5 h-5")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path></path>
        </svg>
    }
}

/// Path for the check mark used in plan feature lists.
pub const CHECK: &str = "M5 13l4 4L19 7";
