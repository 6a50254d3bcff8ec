//! Rotating testimonial carousel

use aim_core::{Carousel, Testimonial};
use leptos::*;

#[component]
pub fn TestimonialCarousel(testimonials: Vec<Testimonial>) -> impl IntoView {
    let carousel = match Carousel::new(testimonials) {
        Ok(carousel) => create_rw_signal(carousel),
        Err(err) => {
            tracing::warn!(error = %err, "Testimonial carousel not rendered");
            return view! {
                <p class="text-center text-gray-400">"Customer stories are coming soon."</p>
            }
            .into_view();
        }
    };

    let current = move || carousel.with(|c| c.current().clone());
    let position = move || carousel.with(|c| c.position());
    let count = carousel.with_untracked(|c| c.len());

    view! {
        <div class="relative bg-slate-900 rounded-2xl p-8 md:p-12">
            <span class="absolute top-8 left-8 text-7xl leading-none text-blue-500 opacity-20">"“"</span>

            {move || {
                let testimonial = current();
                view! {
                    <div class="flex flex-col md:flex-row items-center gap-8 animate-slide-in">
                        <div class="flex-1">
                            <div class="flex items-center gap-4 mb-6">
                                <img
                                    src=testimonial.image_url
                                    alt=testimonial.name.clone()
                                    class="w-16 h-16 rounded-full"
                                />
                                <div>
                                    <h3 class="text-xl font-semibold text-white">{testimonial.name}</h3>
                                    <p class="text-gray-400">{testimonial.role}</p>
                                    <p class="text-blue-400">{testimonial.company}</p>
                                </div>
                            </div>

                            <p class="text-xl text-gray-300 mb-8">{testimonial.quote}</p>

                            <div class="grid grid-cols-3 gap-4">
                                {testimonial.stats.into_iter().map(|stat| view! {
                                    <div class="bg-white/10 rounded-lg p-4">
                                        <div class="text-2xl font-bold text-white mb-1">{stat.value}</div>
                                        <div class="text-gray-400 capitalize">{stat.label}</div>
                                    </div>
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    </div>
                }
            }}

            // Controls
            <div class="flex justify-center items-center gap-4 mt-8">
                <button
                    aria-label="Previous testimonial"
                    class="p-2 rounded-full bg-white/10 hover:bg-white/20 text-white transition-colors"
                    on:click=move |_| carousel.update(|c| c.previous())
                >
                    <ChevronIcon points="15 18 9 12 15 6"/>
                </button>
                <div class="flex gap-2">
                    {(0..count).map(|index| view! {
                        <span class=move || {
                            if position() == index {
                                "w-2 h-2 rounded-full transition-colors bg-white"
                            } else {
                                "w-2 h-2 rounded-full transition-colors bg-white/30"
                            }
                        }></span>
                    }).collect::<Vec<_>>()}
                </div>
                <button
                    aria-label="Next testimonial"
                    class="p-2 rounded-full bg-white/10 hover:bg-white/20 text-white transition-colors"
                    on:click=move |_| carousel.update(|c| c.next())
                >
                    <ChevronIcon points="9 18 15 12 9 6"/>
                </button>
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn ChevronIcon(points: &'static str) -> impl IntoView {
    view! {
        <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
            <polyline points=points stroke-linecap="round" stroke-linejoin="round"/>
        </svg>
    }
}
