//! AIManufacture Pro Site Core
//!
//! UI-independent pieces of the marketing site: the content model loaded
//! from the embedded JSON document, the testimonial carousel, the
//! demo-request form state machine and the small bits of component state
//! (navigation, billing toggle) that the Leptos views drive.

pub mod carousel;
pub mod content;
pub mod demo;
pub mod nav;

use thiserror::Error;

pub use carousel::Carousel;
pub use content::{SiteContent, Testimonial};
pub use demo::{
    DemoField, DemoRequest, DemoRequestForm, FieldUpdate, ProductionLines, SubmissionBackend,
    SubmissionStatus, SUBMIT_DELAY,
};
pub use nav::NavState;

#[cfg(feature = "runtime")]
pub use demo::{FormSession, SimulatedBackend};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Content error: {0}")]
    Content(#[from] serde_json::Error),

    #[error("Submission error: {0}")]
    Submission(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
