//! Demo request call-to-action

use aim_core::SiteContent;
use leptos::*;

use crate::components::{DemoRequestPanel, MetricTile};

#[component]
pub fn CtaSection() -> impl IntoView {
    let metrics = expect_context::<SiteContent>().cta_metrics;

    view! {
        <section id="demo" class="relative bg-gradient-to-b from-slate-900 to-blue-900 py-24 overflow-hidden">
            // Background glow
            <div class="absolute inset-0 opacity-10">
                <div class="absolute w-96 h-96 -top-48 -right-48 bg-blue-500 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute w-96 h-96 -bottom-48 -left-48 bg-purple-500 rounded-full blur-3xl animate-pulse"></div>
            </div>

            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="bg-white rounded-2xl p-8 shadow-xl">
                        <DemoRequestPanel/>
                    </div>

                    <div class="text-white">
                        <div class="mb-12">
                            <h2 class="text-4xl font-bold mb-4">"Transform Your Manufacturing"</h2>
                            <p class="text-xl text-gray-300">
                                "Join industry leaders who have already revolutionized their "
                                "operations with AIManufacture Pro's cutting-edge AI technology."
                            </p>
                        </div>
                        <div class="grid gap-6">
                            {metrics.into_iter().map(|metric| view! { <MetricTile metric=metric/> }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
