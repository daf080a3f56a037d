//! Static content for the SubTrack marketing site.
//!
//! Everything here is compiled in and immutable: the navigation targets,
//! the pricing plans and FAQ, the About copy and the feature list. The web
//! crate renders these; nothing else writes them.
//!
//! # Example
//!
//! ```
//! use subtrack_site::{NAV_LINKS, PLANS, SiteRoute};
//!
//! let pricing = NAV_LINKS.iter().find(|l| l.label == "Pricing").unwrap();
//! assert_eq!(pricing.route, SiteRoute::Pricing);
//! assert_eq!(pricing.href(), "/pricing");
//!
//! let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).collect();
//! assert_eq!(popular.len(), 1);
//! ```

pub mod about;
pub mod features;
pub mod nav;
pub mod pricing;

pub use about::{ABOUT_SECTIONS, AboutSection, CompanyValue, VALUES};
pub use features::{FEATURES, Feature};
pub use nav::{FOOTER_LINKS, NAV_LINKS, NavLink, SiteRoute};
pub use pricing::{FAQ, FaqEntry, PLANS, PricingPlan};

/// Product name shown in the header, footer and page titles.
pub const BRAND: &str = "SubTrack";

/// Address published on the Contact page.
pub const SUPPORT_EMAIL: &str = "support@subtrack.app";
