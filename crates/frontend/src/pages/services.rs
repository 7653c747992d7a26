use leptos::prelude::*;

use super::chrome::{PublicFooter, PublicHeader};
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingPeriod {
    Monthly,
    Yearly,
}

struct Plan {
    name: &'static str,
    monthly_etb: &'static str,
    yearly_etb: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "The Starter",
        monthly_etb: "1,500",
        yearly_etb: "14,400",
        blurb: "Perfect for beginners looking to start their fitness journey with essential access.",
        features: &[
            "Gym floor access (Off-peak)",
            "Locker room access",
            "Free WiFi",
        ],
        featured: false,
    },
    Plan {
        name: "The Standard",
        monthly_etb: "2,500",
        yearly_etb: "24,000",
        blurb: "Full access for people who train on their own schedule.",
        features: &[
            "Unlimited gym floor access",
            "All group classes",
            "Locker room access",
            "One trainer consultation / month",
        ],
        featured: true,
    },
    Plan {
        name: "The Premium",
        monthly_etb: "4,000",
        yearly_etb: "38,400",
        blurb: "Everything the club offers, around the clock.",
        features: &[
            "24/7 access",
            "All group classes",
            "Monthly personal training sessions",
            "Sauna and recovery zone",
            "Free underground parking",
        ],
        featured: false,
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    let billing = RwSignal::new(BillingPeriod::Monthly);

    view! {
        <div class="site-page">
            <PublicHeader />

            <main>
                <section class="hero hero--compact">
                    <span class="hero__eyebrow">"Premium Membership"</span>
                    <h1>"Invest in Your Best Self"</h1>
                    <p class="hero__lede">
                        "Choose your transformation path. No hidden fees, just results."
                    </p>

                    <div class="billing-toggle">
                        <button
                            class="billing-toggle__option"
                            class:billing-toggle__option--active=move || {
                                billing.get() == BillingPeriod::Monthly
                            }
                            on:click=move |_| billing.set(BillingPeriod::Monthly)
                        >
                            "Monthly"
                        </button>
                        <button
                            class="billing-toggle__option"
                            class:billing-toggle__option--active=move || {
                                billing.get() == BillingPeriod::Yearly
                            }
                            on:click=move |_| billing.set(BillingPeriod::Yearly)
                        >
                            "Yearly"
                        </button>
                    </div>
                </section>

                <section class="plan-grid">
                    {PLANS
                        .iter()
                        .map(|plan| {
                            let monthly = plan.monthly_etb;
                            let yearly = plan.yearly_etb;
                            view! {
                                <div class="plan-card" class:plan-card--featured=plan.featured>
                                    <h3>{plan.name}</h3>
                                    <div class="plan-card__price">
                                        <span class="plan-card__amount">
                                            "ETB "
                                            {move || {
                                                match billing.get() {
                                                    BillingPeriod::Monthly => monthly,
                                                    BillingPeriod::Yearly => yearly,
                                                }
                                            }}
                                        </span>
                                        <span class="plan-card__period">
                                            {move || {
                                                match billing.get() {
                                                    BillingPeriod::Monthly => "/month",
                                                    BillingPeriod::Yearly => "/year",
                                                }
                                            }}
                                        </span>
                                    </div>
                                    <p class="plan-card__blurb">{plan.blurb}</p>
                                    <ul class="plan-card__features">
                                        {plan
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li>
                                                        {icon("check")}
                                                        <span>{*feature}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                    <a href="/faq" class="btn-primary plan-card__cta">
                                        "Get Started"
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>
            </main>

            <PublicFooter />
        </div>
    }
}
