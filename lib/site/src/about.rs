//! Copy for the About page.

pub const TAGLINE: &str = "We help you take control of your subscriptions and save money.";

/// A titled block of prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const ABOUT_SECTIONS: &[AboutSection] = &[
    AboutSection {
        heading: "Our Mission",
        paragraphs: &[
            "At SubTrack, we believe that managing subscriptions should be simple and \
             stress-free. Our mission is to help individuals and businesses take control \
             of their recurring expenses by providing an intuitive platform that makes \
             tracking, analyzing, and optimizing subscriptions effortless.",
            "We understand how easy it is to lose track of multiple subscriptions, leading \
             to unnecessary expenses. That's why we've built a solution that not only helps \
             you keep track of what you're paying for but also provides insights to help \
             you save money.",
        ],
    },
    AboutSection {
        heading: "Our Story",
        paragraphs: &[
            "SubTrack was founded in 2023 by a team of financial enthusiasts who were \
             frustrated with the lack of transparency in subscription management. We \
             realized that many people were unknowingly overspending on subscriptions they \
             had forgotten about or weren't using effectively.",
            "What started as a personal project to solve our own subscription management \
             problems quickly evolved into a full-fledged solution that we believed could \
             help others as well. Today, SubTrack is used by thousands of users worldwide \
             to regain control over their recurring expenses.",
        ],
    },
];

/// One entry in the "Our Values" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyValue {
    pub label: &'static str,
    /// SVG path data for the 24x24 outline icon.
    pub icon_path: &'static str,
}

pub const VALUES: &[CompanyValue] = &[
    CompanyValue {
        label: "Transparency in pricing and features",
        icon_path: "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
    },
    CompanyValue {
        label: "Security and privacy of user data",
        icon_path: "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z",
    },
    CompanyValue {
        label: "User-centric design and experience",
        icon_path: "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z",
    },
    CompanyValue {
        label: "Continuous innovation and improvement",
        icon_path: "M13 10V3L4 14h7v7l9-11h-7z",
    },
];
