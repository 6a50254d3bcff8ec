//! Card components for marketing sections

use aim_core::content::{CaseStudy, CtaMetric, Feature, HeroStat, IntegrationFeature};
use leptos::*;

#[component]
pub fn HeroStatCard(stat: HeroStat) -> impl IntoView {
    view! {
        <div class="bg-white/10 backdrop-blur-lg rounded-xl p-6 text-white animate-fade-in-up">
            <div class=format!("text-5xl mb-4 {}", stat.accent)>{stat.icon}</div>
            <h3 class="text-4xl font-bold mb-2">{stat.value}</h3>
            <p>{stat.label}</p>
        </div>
    }
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="group bg-white/70 backdrop-blur-lg rounded-xl p-6 shadow-lg hover:shadow-xl hover:scale-105 transition-all border border-white/20 relative overflow-hidden">
            <div class="bg-blue-100 w-12 h-12 rounded-lg flex items-center justify-center mb-4 transition-transform group-hover:rotate-12">
                <span class="text-2xl">{feature.icon}</span>
            </div>
            <h3 class="text-xl font-semibold mb-2 text-gray-900">{feature.title.clone()}</h3>
            <p class="text-gray-600 mb-4">{feature.description}</p>
            <img
                src=feature.image
                alt=feature.title
                class="w-full h-48 object-cover rounded-lg transition-transform duration-300 hover:scale-110"
            />
        </div>
    }
}

#[component]
pub fn MetricTile(metric: CtaMetric) -> impl IntoView {
    view! {
        <div class="bg-white/10 backdrop-blur-lg rounded-xl p-6 flex items-center gap-4">
            <span class="text-3xl">{metric.icon}</span>
            <div>
                <div class="text-2xl font-bold">{metric.value}</div>
                <div class="text-gray-300">{metric.label}</div>
            </div>
        </div>
    }
}

#[component]
pub fn IntegrationFeatureCard(feature: IntegrationFeature) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 shadow-lg hover:shadow-xl transition-shadow">
            <div class="text-4xl mb-4">{feature.icon}</div>
            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
            <p class="text-gray-600">{feature.description}</p>
        </div>
    }
}

#[component]
pub fn CaseStudyCard(study: CaseStudy) -> impl IntoView {
    view! {
        <div class="group cursor-pointer">
            <div class="relative overflow-hidden rounded-xl mb-4">
                <img
                    src=study.image
                    alt=study.title.clone()
                    class="w-full object-cover transition-transform duration-300 group-hover:scale-105"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
                <div class="absolute bottom-4 left-4 text-white">
                    <p class="text-sm font-semibold mb-1">{study.company}</p>
                    <p class="text-2xl font-bold">{study.metric}</p>
                </div>
            </div>
            <h4 class="text-xl font-semibold mb-2 group-hover:text-blue-600 transition-colors">
                {study.title}
            </h4>
            <p class="text-gray-600">{study.description}</p>
        </div>
    }
}

#[component]
pub fn PricingFeature(text: String, highlight: bool) -> impl IntoView {
    let style = if highlight { "text-blue-100" } else { "text-blue-600" };

    view! {
        <li class="flex items-center gap-3">
            <span class=format!("{} font-bold", style)>"✓"</span>
            <span>{text}</span>
        </li>
    }
}
