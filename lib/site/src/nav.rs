//! Routes and navigation links.

/// Every client-side navigable path on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    Features,
    Pricing,
    About,
    Contact,
    Login,
    Signup,
    ForgotPassword,
}

impl SiteRoute {
    /// Returns the absolute path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Features => "/features",
            Self::Pricing => "/pricing",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::ForgotPassword => "/forgot-password",
        }
    }

    /// Returns the document title for this route.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "SubTrack",
            Self::Features => "Features - SubTrack",
            Self::Pricing => "Pricing - SubTrack",
            Self::About => "About - SubTrack",
            Self::Contact => "Contact - SubTrack",
            Self::Login => "Sign in - SubTrack",
            Self::Signup => "Sign up - SubTrack",
            Self::ForgotPassword => "Reset password - SubTrack",
        }
    }
}

/// A labelled link to one of the site's routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: SiteRoute,
}

impl NavLink {
    /// Returns the anchor target for this link.
    #[must_use]
    pub const fn href(&self) -> &'static str {
        self.route.path()
    }
}

/// The primary navigation, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        route: SiteRoute::Home,
    },
    NavLink {
        label: "Features",
        route: SiteRoute::Features,
    },
    NavLink {
        label: "Pricing",
        route: SiteRoute::Pricing,
    },
    NavLink {
        label: "About",
        route: SiteRoute::About,
    },
    NavLink {
        label: "Contact",
        route: SiteRoute::Contact,
    },
];

/// Secondary links shown in the footer.
pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink {
        label: "Sign in",
        route: SiteRoute::Login,
    },
    NavLink {
        label: "Sign up",
        route: SiteRoute::Signup,
    },
    NavLink {
        label: "Pricing",
        route: SiteRoute::Pricing,
    },
    NavLink {
        label: "Contact",
        route: SiteRoute::Contact,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_links_target_declared_paths() {
        let expected = [
            ("Home", "/"),
            ("Features", "/features"),
            ("Pricing", "/pricing"),
            ("About", "/about"),
            ("Contact", "/contact"),
        ];
        let actual: Vec<_> = NAV_LINKS.iter().map(|l| (l.label, l.href())).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn footer_links_target_declared_paths() {
        let actual: Vec<_> = FOOTER_LINKS.iter().map(|l| (l.label, l.href())).collect();
        assert_eq!(
            actual,
            [
                ("Sign in", "/login"),
                ("Sign up", "/signup"),
                ("Pricing", "/pricing"),
                ("Contact", "/contact"),
            ]
        );
    }

    #[test]
    fn account_routes_are_distinct() {
        let paths: HashSet<_> = [SiteRoute::Login, SiteRoute::Signup, SiteRoute::ForgotPassword]
            .into_iter()
            .chain(NAV_LINKS.iter().map(|l| l.route))
            .map(SiteRoute::path)
            .collect();
        assert_eq!(paths.len(), 8);
    }

    #[test]
    fn titles_name_the_brand() {
        assert_eq!(SiteRoute::Home.title(), "SubTrack");
        assert!(SiteRoute::ForgotPassword.title().ends_with("- SubTrack"));
    }
}
