//! Hero banner

use aim_core::SiteContent;
use leptos::*;

use crate::components::HeroStatCard;

#[component]
pub fn HeroSection() -> impl IntoView {
    let stats = expect_context::<SiteContent>().hero_stats;

    view! {
        <section class="relative min-h-screen bg-gradient-to-b from-slate-900 to-slate-800 overflow-hidden">
            // Video background
            <div class="absolute inset-0 z-0">
                <video autoplay muted loop class="w-full h-full object-cover">
                    <source src="/images/hero-vid.mp4" type="video/mp4"/>
                    "Your browser does not support the video tag."
                </video>
                <div class="absolute inset-0 bg-black/50"></div>
            </div>

            <div class="relative z-10 container mx-auto mt-5 px-4 pt-20 pb-32">
                <div class="flex flex-col items-center text-center">
                    <h1 class="text-5xl md:text-7xl font-bold text-white mb-6 animate-fade-in-up">
                        "AIManufacture Pro"
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-300 mb-12 max-w-3xl animate-fade-in-up">
                        "Transform your manufacturing with AI-powered intelligence. "
                        "Control 1,000+ production lines with unprecedented precision and efficiency."
                    </p>

                    <div class="grid grid-cols-1 md:w-auto w-full md:grid-cols-3 gap-8 mb-12">
                        {stats.into_iter().map(|stat| view! { <HeroStatCard stat=stat/> }).collect::<Vec<_>>()}
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4">
                        <a href="#demo" class="px-8 py-4 bg-blue-600 hover:bg-blue-700 hover:scale-105 text-white rounded-lg font-semibold text-lg transition">
                            "Get Started"
                        </a>
                        <a href="#preview" class="px-8 py-4 bg-white/10 hover:bg-white/20 hover:scale-105 text-white rounded-lg font-semibold text-lg transition">
                            "Watch Demo"
                        </a>
                    </div>
                </div>

                // Scroll indicator
                <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce text-white/60 text-3xl">
                    "⌄"
                </div>
            </div>
        </section>
    }
}
