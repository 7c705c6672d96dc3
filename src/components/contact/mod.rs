//! Contact section: form state, payload serialization, and the single-shot
//! submission to the form relay endpoint.

mod component;
mod model;

pub use component::ContactSection;
pub use model::{ContactPayload, SubmitStatus};
