//! Success stories: testimonial carousel and case studies

use aim_core::SiteContent;
use leptos::*;

use crate::components::{CaseStudyCard, TestimonialCarousel};

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();

    view! {
        <section id="testimonials" class="bg-white py-24">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4 text-gray-900">"Success Stories"</h2>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                        "See how leading manufacturers are transforming their operations with AIManufacture Pro"
                    </p>
                </div>

                <div class="mb-24">
                    <TestimonialCarousel testimonials=content.testimonials/>
                </div>

                <div>
                    <div id="resources" class="flex justify-between items-center mb-8">
                        <h3 class="text-2xl font-bold text-gray-900">"Featured Case Studies"</h3>
                        <a href="#resources" class="flex items-center gap-2 text-blue-600 hover:text-blue-700 transition-colors">
                            "View All Case Studies →"
                        </a>
                    </div>
                    <div class="grid md:grid-cols-2 gap-8">
                        {content.case_studies.into_iter().map(|study| view! {
                            <CaseStudyCard study=study/>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
