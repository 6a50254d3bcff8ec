//! Feature cards

use aim_core::SiteContent;
use leptos::*;

use crate::components::FeatureCard;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    let features = expect_context::<SiteContent>().features;

    view! {
        <section id="features" class="bg-gradient-to-br from-blue-50 to-purple-50 py-24">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4 text-gray-900">"Revolutionize Your Manufacturing"</h2>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                        "Our platform combines cutting-edge AI with industrial expertise to "
                        "deliver unprecedented control and efficiency."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {features.into_iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
