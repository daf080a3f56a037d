//! Page components for the application.
//!
//! Each page is a Leptos component bound to one route and wrapped in the
//! [`PageShell`](crate::components::PageShell), along with any server
//! functions specific to that page.

pub mod about;
pub mod contact;
pub mod features;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pricing;
pub mod signup;

// Re-export all page components for convenient access
pub use about::AboutPage;
pub use contact::ContactPage;
pub use features::FeaturesPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use signup::SignupPage;
