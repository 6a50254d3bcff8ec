//! Home page

use leptos::*;

use crate::sections::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <HeroSection/>
            <FeaturesSection/>
            <DashboardPreviewSection/>
            <CtaSection/>
            <IntegrationSection/>
            <TestimonialsSection/>
            <PricingSection/>
        </div>
    }
}
