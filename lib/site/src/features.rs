//! Cards on the Features page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "All subscriptions in one place",
        description: "See every recurring charge side by side, with its price and billing cycle.",
    },
    Feature {
        title: "Renewal alerts",
        description: "Get a reminder before a subscription renews so you can decide whether to keep it.",
    },
    Feature {
        title: "Spending analytics",
        description: "Monthly and yearly totals, broken down by category.",
    },
    Feature {
        title: "Usage tracking",
        description: "Note how often you use a service and spot the ones you have stopped using.",
    },
    Feature {
        title: "Data export",
        description: "Download your subscription list whenever you need it.",
    },
    Feature {
        title: "Team sharing",
        description: "Manage shared subscriptions together on the Business plan.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_unique() {
        let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }
}
