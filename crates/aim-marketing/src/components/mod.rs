//! Marketing site components

mod cards;
mod carousel;
mod demo_form;
mod footer;
mod nav;

pub use cards::*;
pub use carousel::TestimonialCarousel;
pub use demo_form::DemoRequestPanel;
pub use footer::Footer;
pub use nav::Navbar;
