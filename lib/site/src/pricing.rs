//! Pricing plans and the pricing FAQ.

/// One plan card on the pricing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    /// Label of the plan's call-to-action button.
    pub cta: &'static str,
    /// Highlighted as "most popular". Exactly one plan should set this.
    pub popular: bool,
}

impl PricingPlan {
    /// Billing period as shown after the price, e.g. `/per month`.
    #[must_use]
    pub fn period_label(&self) -> String {
        format!("/{}", self.period)
    }
}

pub const PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Free",
        price: "$0",
        period: "forever",
        features: &[
            "Track up to 5 subscriptions",
            "Basic renewal alerts",
            "Email support",
            "Community access",
        ],
        cta: "Get Started",
        popular: false,
    },
    PricingPlan {
        name: "Pro",
        price: "$4.99",
        period: "per month",
        features: &[
            "Unlimited subscriptions",
            "Advanced analytics",
            "Priority renewal alerts",
            "Usage tracking",
            "Priority email support",
            "Export data",
        ],
        cta: "Try Free for 14 Days",
        popular: true,
    },
    PricingPlan {
        name: "Business",
        price: "$9.99",
        period: "per month",
        features: &[
            "Everything in Pro",
            "Team collaboration (up to 5 users)",
            "Custom categories",
            "Advanced reporting",
            "Dedicated account manager",
            "Phone support",
        ],
        cta: "Try Free for 14 Days",
        popular: false,
    },
];

/// A question and answer shown under the plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Can I change plans later?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. \
                 Your billing will be prorated accordingly.",
    },
    FaqEntry {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards including Visa, Mastercard, \
                 and American Express.",
    },
    FaqEntry {
        question: "Do you offer discounts for students or non-profits?",
        answer: "Yes, we offer special pricing for students and non-profit \
                 organizations. Please contact our support team for more information.",
    },
];
