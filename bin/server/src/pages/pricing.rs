//! Pricing page component.

use crate::components::icon::CHECK;
use crate::components::{Icon, PageShell};
use leptos::prelude::*;
use subtrack_site::{FAQ, PLANS, PricingPlan, SiteRoute};

const CARD_CLASS: &str = "plan-card bg-white rounded-lg shadow-md overflow-hidden";
const POPULAR_CARD_CLASS: &str =
    "plan-card bg-white rounded-lg shadow-md overflow-hidden ring-2 ring-blue-500 transform scale-105";

/// One plan column. The badge and ring only appear on the popular plan.
#[component]
fn PlanCard(plan: &'static PricingPlan) -> impl IntoView {
    let card_class = if plan.popular { POPULAR_CARD_CLASS } else { CARD_CLASS };
    let button_class = if plan.popular {
        "w-full py-2 px-4 rounded-md font-medium bg-blue-600 text-white hover:bg-blue-700"
    } else {
        "w-full py-2 px-4 rounded-md font-medium bg-gray-100 text-gray-900 hover:bg-gray-200"
    };

    view! {
        <div class=card_class data-plan=plan.name>
            {plan
                .popular
                .then(|| {
                    view! {
                        <div class="popular-badge bg-blue-500 text-white text-center py-1 text-sm font-medium">
                            "MOST POPULAR"
                        </div>
                    }
                })}
            <div class="p-6">
                <h2 class="text-2xl font-bold text-gray-900 mb-2">{plan.name}</h2>
                <div class="flex items-baseline mb-4">
                    <span class="text-4xl font-extrabold text-gray-900">{plan.price}</span>
                    <span class="text-gray-500 ml-1">{plan.period_label()}</span>
                </div>
                <ul class="plan-features mb-6 space-y-3">
                    {plan
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="flex items-start">
                                    <Icon path=CHECK class="w-5 h-5 text-green-500 mr-2"/>
                                    <span class="text-gray-600">{*feature}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                // Checkout is not wired up; the button is inert.
                <button type="button" class=button_class>
                    {plan.cta}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <PageShell title=SiteRoute::Pricing.title()>
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Simple, Transparent Pricing"</h1>
                <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                    "Choose the plan that works best for you. All plans include a 14-day free trial."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                {PLANS.iter().map(|plan| view! { <PlanCard plan/> }).collect_view()}
            </div>

            <div class="faq mt-16 max-w-3xl mx-auto">
                <h2 class="text-2xl font-bold text-gray-900 mb-6 text-center">
                    "Frequently Asked Questions"
                </h2>
                <div class="space-y-6">
                    {FAQ
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="faq-entry bg-white rounded-lg shadow-md p-6">
                                    <h3 class="text-lg font-semibold text-gray-900 mb-2">
                                        {entry.question}
                                    </h3>
                                    <p class="text-gray-600">{entry.answer}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageShell>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    fn card_html<'a>(html: &'a str, plan: &str) -> &'a str {
        let marker = format!("data-plan=\"{plan}\"");
        let start = html.find(&marker).expect("plan card");
        let rest = &html[start..];
        let end = rest.find("</ul>").expect("feature list end");
        &rest[..end]
    }

    #[test]
    fn renders_three_plan_cards() {
        let html = render(|| view! { <PricingPage/> });
        assert_eq!(html.matches("data-plan=").count(), 3);
        assert!(html.contains("Simple, Transparent Pricing"));
        assert!(html.contains("Frequently Asked Questions"));
    }

    #[test]
    fn only_pro_carries_the_badge() {
        let html = render(|| view! { <PricingPage/> });
        assert_eq!(html.matches("MOST POPULAR").count(), 1);
        assert!(card_html(&html, "Pro").contains("MOST POPULAR"));
        assert!(!card_html(&html, "Free").contains("MOST POPULAR"));
        assert!(!card_html(&html, "Business").contains("MOST POPULAR"));
    }

    #[test]
    fn feature_lists_match_plans() {
        let html = render(|| view! { <PricingPage/> });
        assert_eq!(card_html(&html, "Free").matches("<li").count(), 4);
        assert_eq!(card_html(&html, "Pro").matches("<li").count(), 6);
        assert_eq!(card_html(&html, "Business").matches("<li").count(), 6);
    }

    #[test]
    fn period_follows_price_with_a_slash() {
        let html = render(|| view! { <PricingPage/> });
        assert!(card_html(&html, "Pro").contains("/per month"));
        assert!(card_html(&html, "Free").contains("/forever"));
    }

    #[test]
    fn faq_has_three_entries() {
        let html = render(|| view! { <PricingPage/> });
        assert_eq!(html.matches("class=\"faq-entry").count(), FAQ.len());
    }
}
