//! Site footer

use aim_core::SiteContent;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let footer = expect_context::<SiteContent>().footer;

    view! {
        <footer class="bg-slate-900 text-white">
            <div class="container mx-auto px-4 py-16">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-6 gap-12 mb-12">
                    // Company info
                    <div class="lg:col-span-2">
                        <h3 class="text-2xl font-bold mb-4">"AIManufacture Pro"</h3>
                        <p class="text-gray-400 mb-6">
                            "Revolutionizing manufacturing with AI-powered solutions for "
                            "increased efficiency, reduced costs, and smarter operations."
                        </p>
                    </div>

                    // Link groups
                    {footer.groups.into_iter().map(|group| view! {
                        <div>
                            <h4 class="text-lg font-semibold mb-4 capitalize">{group.title}</h4>
                            <ul class="space-y-3">
                                {group.links.into_iter().map(|link| view! {
                                    <li>
                                        <a href="#" class="text-gray-400 hover:text-white transition-colors">
                                            {link}
                                        </a>
                                    </li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                // Bottom bar
                <div class="border-t border-gray-800 pt-8">
                    <div class="flex flex-col md:flex-row justify-between items-center gap-4">
                        <div class="flex gap-4">
                            {footer.social.into_iter().map(|social| view! {
                                <a
                                    href=social.href
                                    aria-label=social.name
                                    class="w-9 h-9 flex items-center justify-center rounded-full bg-gray-800 hover:bg-gray-700 transition-colors text-sm font-semibold"
                                >
                                    {social.icon}
                                </a>
                            }).collect::<Vec<_>>()}
                        </div>
                        <div class="text-gray-400 text-sm">
                            "© 2024 AIManufacture Pro. All rights reserved."
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
