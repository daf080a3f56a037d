//! Shared UI components.
//!
//! The layout shell (header, navbar, footer) wraps every page; the form
//! pieces are shared by the account pages.

pub mod email_field;
pub mod footer;
pub mod header;
pub mod icon;
pub mod login_form;
pub mod navbar;
pub mod page_shell;
pub mod signup_form;

pub use email_field::{EmailField, PasswordField};
pub use footer::Footer;
pub use header::Header;
pub use icon::Icon;
pub use login_form::LoginForm;
pub use navbar::Navbar;
pub use page_shell::PageShell;
pub use signup_form::SignupForm;

/// Classes shared by every text input on the account forms.
pub(crate) const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border \
    border-gray-300 placeholder-gray-500 text-gray-900 rounded-md focus:outline-none \
    focus:ring-blue-500 focus:border-blue-500 sm:text-sm";

/// Classes for the primary submit button on the account forms.
pub(crate) const SUBMIT_CLASS: &str = "group relative w-full flex justify-center py-2 px-4 \
    border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 \
    hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500";

/// Classes for the in-card links under the account forms.
pub(crate) const LINK_CLASS: &str = "text-sm text-blue-600 hover:text-blue-500";

/// Renders a component to HTML inside a fresh reactive owner.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: leptos::prelude::IntoView,
{
    use leptos::prelude::*;

    let owner = Owner::new_root(None);
    owner.with(|| {
        leptos_meta::provide_meta_context();
        view().to_html()
    })
}
