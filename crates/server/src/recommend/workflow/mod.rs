//! Multi-step workflows: template library, matcher and generator.

mod generator;
pub mod templates;

pub(crate) use generator::{FallbackSlot, fallback_recommendation};
pub use generator::generate_workflow;
pub use templates::{all_templates, find_matching_template, template_by_id};
