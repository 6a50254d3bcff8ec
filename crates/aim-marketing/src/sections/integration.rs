//! Integration ecosystem

use aim_core::SiteContent;
use leptos::*;

use crate::components::IntegrationFeatureCard;

#[component]
pub fn IntegrationSection() -> impl IntoView {
    let integrations = expect_context::<SiteContent>().integrations;

    view! {
        <section class="bg-gradient-to-b from-gray-50 to-white py-24">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">"Seamless Integration Ecosystem"</h2>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                        "Connect AIManufacture Pro with your existing technology stack through "
                        "our enterprise-grade integration platform"
                    </p>
                </div>

                // Platform diagram
                <div class="relative bg-white rounded-2xl shadow-xl p-8 mb-16">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {integrations.categories.into_iter().map(|tech| view! {
                            <div class="text-center">
                                <h3 class="text-lg font-semibold mb-6">{tech.category}</h3>
                                <div class="grid grid-cols-2 gap-4">
                                    {tech.items.into_iter().map(|item| view! {
                                        <div class="flex flex-col items-center p-4 rounded-lg bg-gray-50 hover:scale-105 transition">
                                            <img src=item.logo alt=item.name.clone() class="mb-2"/>
                                            <span class="text-sm font-medium">{item.name}</span>
                                        </div>
                                    }).collect::<Vec<_>>()}
                                </div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>

                    <div class="absolute left-1/2 top-1/2 transform -translate-x-1/2 -translate-y-1/2">
                        <div class="w-20 h-20 bg-blue-600 rounded-full flex items-center justify-center animate-spin-slow">
                            <span class="text-4xl text-white">"⚙"</span>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {integrations.features.into_iter().map(|feature| view! {
                        <IntegrationFeatureCard feature=feature/>
                    }).collect::<Vec<_>>()}
                </div>

                // API reference preview
                <div class="mt-16 bg-slate-900 rounded-xl p-6 overflow-hidden">
                    <div class="flex items-center justify-between mb-4">
                        <div class="flex items-center gap-2">
                            <div class="w-3 h-3 rounded-full bg-red-500"></div>
                            <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                            <div class="w-3 h-3 rounded-full bg-green-500"></div>
                        </div>
                        <span class="text-gray-400 text-sm">"API Example"</span>
                    </div>
                    <pre class="text-sm text-gray-300 overflow-x-auto">{integrations.api_example}</pre>
                </div>
            </div>
        </section>
    }
}
