//! Main Leptos application component and routing.

use crate::pages::{
    AboutPage, ContactPage, FeaturesPage, ForgotPasswordPage, HomePage, LoginPage, NotFoundPage,
    PricingPage, SignupPage,
};
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use subtrack_site::BRAND;

/// The main application component.
///
/// Every page renders its own [`PageShell`](crate::components::PageShell),
/// so the router only swaps whole pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=BRAND/>
        <Meta name="description" content="Track every subscription, get renewal alerts, and stop paying for what you don't use."/>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/features") view=FeaturesPage/>
                <Route path=path!("/pricing") view=PricingPage/>
                <Route path=path!("/about") view=AboutPage/>
                <Route path=path!("/contact") view=ContactPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
            </Routes>
        </Router>
    }
}
