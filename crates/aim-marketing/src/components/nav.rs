//! Marketing navigation component

use aim_core::content::NavItem;
use aim_core::{NavState, SiteContent};
use leptos::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let items = expect_context::<SiteContent>().nav;
    let nav = create_rw_signal(NavState::new());

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        nav.update(|n| n.on_scroll(offset));
    });
    on_cleanup(move || scroll_listener.remove());

    let scrolled = move || nav.with(|n| n.scrolled());
    let mobile_open = move || nav.with(|n| n.mobile_open());
    let link_class = move || {
        if scrolled() {
            "flex items-center gap-1 font-medium text-gray-900 hover:text-blue-600"
        } else {
            "flex items-center gap-1 font-medium text-white hover:text-blue-200"
        }
    };
    let icon_class = move || if scrolled() { "text-gray-900" } else { "text-white" };

    let desktop_items = items.clone();
    let mobile_items = items;

    view! {
        <nav class=move || {
            if scrolled() {
                "fixed w-full z-50 transition-all duration-300 bg-white shadow-lg"
            } else {
                "fixed w-full z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-20">
                    // Logo
                    <div class="flex-shrink-0 flex gap-3 items-center">
                        <span class=move || format!("text-3xl {}", icon_class())>"◐"</span>
                        <a href="/" class=move || format!("text-2xl font-bold {}", icon_class())>
                            "AIManufacture Pro"
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center gap-8">
                        {desktop_items.into_iter().map(|item| {
                            let has_dropdown = item.has_dropdown();
                            let link = item.link.clone();
                            let label = item.label.clone();
                            let text = label.clone();
                            let hover_label = label.clone();
                            view! {
                                <div
                                    class="relative"
                                    on:mouseenter=move |_| nav.update(|n| n.open_dropdown(&hover_label, has_dropdown))
                                    on:mouseleave=move |_| nav.update(|n| n.close_dropdown())
                                >
                                    <a href=link class=link_class>
                                        {text}
                                        {has_dropdown.then(|| view! { <span class="text-xs">"▾"</span> })}
                                    </a>
                                    <Show when=move || nav.with(|n| n.is_dropdown_open(&label))>
                                        <DesktopDropdown item=item.clone()/>
                                    </Show>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>

                    // Right side buttons
                    <div class="hidden md:flex items-center gap-4">
                        <button
                            aria-label="Search"
                            class=move || if scrolled() { "p-2 rounded-full hover:bg-gray-100" } else { "p-2 rounded-full hover:bg-white/10" }
                            on:click=move |_| nav.update(|n| n.toggle_search())
                        >
                            <SearchIcon tone=Signal::derive(icon_class)/>
                        </button>
                        <a
                            href="/signin"
                            class=move || format!("px-4 py-2 rounded-lg font-medium {}", if scrolled() { "text-gray-900 hover:bg-gray-100" } else { "text-white hover:bg-white/10" })
                        >
                            "Sign In"
                        </a>
                        <a href="/get-started" class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium">
                            "Get Started"
                        </a>
                    </div>

                    // Mobile menu button
                    <button
                        aria-label="Toggle menu"
                        class="md:hidden p-2"
                        on:click=move |_| nav.update(|n| n.toggle_mobile())
                    >
                        <Show
                            when=mobile_open
                            fallback=move || view! {
                                <svg class=move || format!("h-6 w-6 {}", icon_class()) fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                </svg>
                            }
                        >
                            <svg class=move || format!("h-6 w-6 {}", icon_class()) fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                            </svg>
                        </Show>
                    </button>
                </div>
            </div>

            // Mobile menu
            <Show when=mobile_open>
                <div class="md:hidden bg-white border-t">
                    <div class="container mx-auto px-4 py-4">
                        {mobile_items.clone().into_iter().map(|item| {
                            let has_dropdown = item.has_dropdown();
                            let link = item.link.clone();
                            let label = item.label.clone();
                            let text = label.clone();
                            let tap_label = label.clone();
                            let chevron_label = label.clone();
                            view! {
                                <div class="py-2">
                                    <a
                                        href=link
                                        class="flex items-center justify-between w-full font-medium text-gray-900"
                                        on:click=move |_| nav.update(|n| n.toggle_dropdown(&tap_label))
                                    >
                                        {text}
                                        {has_dropdown.then(|| view! {
                                            <span class=move || {
                                                if nav.with(|n| n.is_dropdown_open(&chevron_label)) {
                                                    "text-xs transition-transform rotate-180"
                                                } else {
                                                    "text-xs transition-transform"
                                                }
                                            }>"▾"</span>
                                        })}
                                    </a>
                                    <Show when=move || nav.with(|n| n.is_dropdown_open(&label))>
                                        <MobileDropdown item=item.clone()/>
                                    </Show>
                                </div>
                            }
                        }).collect::<Vec<_>>()}

                        <div class="mt-4 space-y-2">
                            <a href="/signin" class="w-full py-2 text-gray-900 font-medium hover:bg-gray-50 rounded-lg block text-center">
                                "Sign In"
                            </a>
                            <a href="/get-started" class="w-full py-2 bg-blue-600 text-white font-medium hover:bg-blue-700 rounded-lg block text-center">
                                "Get Started"
                            </a>
                        </div>
                    </div>
                </div>
            </Show>

            // Search overlay
            <Show when=move || nav.with(|n| n.search_open())>
                <div
                    class="fixed inset-0 bg-black/50 flex items-start justify-center pt-24"
                    on:click=move |_| nav.update(|n| n.close_search())
                >
                    <div
                        class="w-full max-w-2xl mx-4 bg-white rounded-xl shadow-2xl"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="flex items-center p-4">
                            <SearchIcon tone=Signal::derive(|| "text-gray-400 mr-3")/>
                            <input
                                type="text"
                                placeholder="Search everything..."
                                class="w-full bg-transparent focus:outline-none text-lg"
                                autofocus
                            />
                            <button
                                aria-label="Close search"
                                class="p-2 hover:bg-gray-100 rounded-full text-gray-500"
                                on:click=move |_| nav.update(|n| n.close_search())
                            >
                                "✕"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn DesktopDropdown(item: NavItem) -> impl IntoView {
    view! {
        <div class="absolute top-full left-0 w-64 bg-white rounded-xl shadow-xl py-2 mt-2 animate-fade-in">
            {item.dropdown.into_iter().map(|entry| view! {
                <a href=entry.link class="flex items-start gap-3 px-4 py-3 hover:bg-gray-50">
                    <span class="text-blue-600 mt-1">{entry.icon}</span>
                    <div>
                        <div class="font-medium text-gray-900">{entry.label}</div>
                        <div class="text-sm text-gray-500">{entry.description}</div>
                    </div>
                </a>
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn MobileDropdown(item: NavItem) -> impl IntoView {
    view! {
        <div class="mt-2 ml-4 space-y-2">
            {item.dropdown.into_iter().map(|entry| view! {
                <a href=entry.link class="flex items-center gap-3 py-2 text-gray-600 hover:text-blue-600">
                    <span>{entry.icon}</span>
                    <span>{entry.label}</span>
                </a>
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn SearchIcon(#[prop(into)] tone: Signal<&'static str>) -> impl IntoView {
    view! {
        <svg class=move || format!("w-6 h-6 {}", tone.get()) fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
            <circle cx="11" cy="11" r="8"/>
            <path stroke-linecap="round" d="M21 21l-4.35-4.35"/>
        </svg>
    }
}
