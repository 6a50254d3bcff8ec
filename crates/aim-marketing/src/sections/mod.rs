//! Landing page sections, top to bottom

mod cta;
mod features;
mod hero;
mod integration;
mod preview;
mod pricing;
mod testimonials;

pub use cta::CtaSection;
pub use features::FeaturesSection;
pub use hero::HeroSection;
pub use integration::IntegrationSection;
pub use preview::DashboardPreviewSection;
pub use pricing::PricingSection;
pub use testimonials::TestimonialsSection;
