//! Pricing tiers

use aim_core::content::{BillingCycle, DisplayPrice, PricingPlan};
use aim_core::SiteContent;
use leptos::*;

use crate::components::PricingFeature;

#[component]
pub fn PricingSection() -> impl IntoView {
    let plans = expect_context::<SiteContent>().plans;
    let (cycle, set_cycle) = create_signal(BillingCycle::default());
    let annual = move || cycle.get().is_annual();

    view! {
        <section id="pricing" class="bg-gray-50 py-24">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4 text-gray-900">"Transparent Pricing"</h2>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto mb-8">
                        "Choose the perfect plan for your manufacturing needs"
                    </p>

                    // Billing toggle
                    <div class="flex items-center justify-center gap-4">
                        <span class=move || if annual() { "text-lg text-gray-500" } else { "text-lg text-gray-900" }>
                            "Monthly"
                        </span>
                        <button
                            aria-label="Toggle billing cycle"
                            class="relative w-16 h-8 bg-blue-600 rounded-full p-1 transition-colors"
                            on:click=move |_| set_cycle.update(|c| *c = c.toggle())
                        >
                            <div class=move || {
                                if annual() {
                                    "w-6 h-6 bg-white rounded-full transition-transform translate-x-8"
                                } else {
                                    "w-6 h-6 bg-white rounded-full transition-transform"
                                }
                            }></div>
                        </button>
                        <span class=move || if annual() { "text-lg text-gray-900" } else { "text-lg text-gray-500" }>
                            "Annually"
                            <span class="ml-2 text-sm text-green-500">"Save 20%"</span>
                        </span>
                    </div>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {plans.into_iter().map(|plan| view! { <PlanCard plan=plan cycle=cycle/> }).collect::<Vec<_>>()}
                </div>

                <div class="mt-16 text-center">
                    <a href="#pricing" class="inline-flex items-center gap-2 text-gray-600 hover:text-gray-900">
                        <span>"?"</span>
                        <span>"Frequently Asked Questions"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: PricingPlan, cycle: ReadSignal<BillingCycle>) -> impl IntoView {
    let highlight = plan.highlight;
    let muted = if highlight { "text-blue-100" } else { "text-gray-600" };
    let card_class = if highlight {
        "relative rounded-2xl p-8 bg-blue-600 text-white shadow-xl shadow-blue-200"
    } else {
        "relative rounded-2xl p-8 bg-white text-gray-900 shadow-lg"
    };
    let button_class = if highlight {
        "w-full py-3 rounded-lg font-semibold mb-8 transition-colors bg-white text-blue-600 hover:bg-gray-100"
    } else {
        "w-full py-3 rounded-lg font-semibold mb-8 transition-colors bg-blue-600 text-white hover:bg-blue-700"
    };
    let cta_label = plan.cta_label();
    let PricingPlan { name, description, price: plan_price, features, .. } = plan;
    let price = move || plan_price.for_cycle(cycle.get());

    view! {
        <div class=card_class>
            {highlight.then(|| view! {
                <div class="absolute top-0 left-1/2 transform -translate-x-1/2 -translate-y-1/2">
                    <span class="bg-green-500 text-white text-sm font-semibold px-4 py-1 rounded-full">
                        "Most Popular"
                    </span>
                </div>
            })}

            <h3 class="text-2xl font-bold mb-2">{name}</h3>
            <p class=format!("mb-6 {}", muted)>{description}</p>

            <div class="mb-8">
                <span class="text-4xl font-bold">{move || price().to_string()}</span>
                {move || matches!(price(), DisplayPrice::PerMonth(_)).then(|| view! {
                    <span class=muted>"/month"</span>
                })}
            </div>

            <a href="#demo" class=format!("block text-center {}", button_class)>
                {cta_label}
            </a>

            <ul class="space-y-4">
                {features.into_iter().map(|feature| view! {
                    <PricingFeature text=feature highlight=highlight/>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
