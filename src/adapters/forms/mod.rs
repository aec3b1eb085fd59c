//! Lead form adapters - Implementations of the LeadSubmitter port.
//!
//! - `FramerFormSubmitter` - Posts leads to a hosted Framer form
//! - `MockLeadSubmitter` - Scripted submitter for tests

mod framer_form;
mod mock_submitter;

pub use framer_form::{FramerFormConfig, FramerFormSubmitter, DEFAULT_FORM_URL};
pub use mock_submitter::MockLeadSubmitter;
