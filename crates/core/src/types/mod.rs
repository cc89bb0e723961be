//! Core types for Toolscout.
//!
//! One type family per file: the recommendable [`Tool`] record, the
//! structured [`ParsedIntent`] produced by the intent pipeline, the static
//! [`WorkflowTemplate`] library types, and the [`Recommendation`] result
//! returned to callers.

pub mod category;
pub mod intent;
pub mod recommendation;
pub mod tool;
pub mod workflow;

pub use category::{Category, ParseCategoryError};
pub use intent::{
    Complexity, ExpertiseLevel, IntentConstraints, IntentError, IntentErrorCode, ParsedIntent,
    PricingPreference, SpeedPreference,
};
pub use recommendation::{RankedTool, Recommendation};
pub use tool::{Pricing, Tool};
pub use workflow::{
    GeneratedWorkflow, MediaType, StepToolRecommendation, WorkflowComplexity,
    WorkflowStepRecommendation, WorkflowStepTemplate, WorkflowTemplate,
};
